use monkey_lexer::config::runtime::RuntimeConfig;
use monkey_lexer::file_processor::FileProcessor;
use monkey_lexer::lexical::LexicalAnalyzer;
use monkey_lexer::logging;
use std::env;

/// Command line options
struct CliOptions {
    input_path: String,
    json_output: bool,
    quiet: bool,
    strict: bool,
    config_path: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.monkey> [options]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    if args[1] == "--help" {
        print_help(&args[0]);
        return Ok(());
    }

    let options = parse_options(&args);

    // Resolve configuration: file if given, otherwise env-var defaults
    let config = match &options.config_path {
        Some(path) => RuntimeConfig::from_toml_file(std::path::Path::new(path))?,
        None => RuntimeConfig::default(),
    };

    // Initialize global logging before any processing
    logging::config::init_runtime_preferences(config.logging.clone())?;
    logging::init_global_logging()?;

    let processor = FileProcessor::from_preferences(&config.file_processor);
    let file_result = match processor.process_file(&options.input_path) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("error[{}]: {}", error.error_code(), error);
            std::process::exit(1);
        }
    };

    let mut analyzer = LexicalAnalyzer::with_preferences(config.lexical.clone());
    let stream = analyzer.tokenize_file_result(&file_result);

    if options.json_output {
        println!("{}", serde_json::to_string_pretty(stream.tokens())?);
    } else {
        for token in stream.tokens() {
            println!("{}", token);
        }
    }

    if !options.quiet {
        print_metrics_summary(analyzer.metrics(), &options.input_path);
    }

    if options.strict && stream.has_illegal_tokens() {
        eprintln!(
            "error: {} unrecognized byte(s) in {}",
            analyzer.metrics().illegal_tokens,
            options.input_path
        );
        std::process::exit(1);
    }

    Ok(())
}

fn print_help(program_name: &str) {
    println!("Monkey Lexer v{}", env!("CARGO_PKG_VERSION"));
    println!("Single-pass tokenizer for Monkey source files");
    println!();
    println!("USAGE:");
    println!("    {} <input.monkey> [options]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <input.monkey>    Path to the Monkey source file to tokenize");
    println!();
    println!("OPTIONS:");
    println!("    --help           Show this help message");
    println!("    --json           Emit tokens as JSON instead of plain listing");
    println!("    --quiet          Suppress the metrics summary");
    println!("    --strict         Exit non-zero if any ILLEGAL tokens are produced");
    println!("    --config FILE    Load runtime preferences from a TOML file");
    println!();
    println!("OUTPUT:");
    println!("    One token per line (kind plus source text), ending with <EOF>.");
    println!("    Unrecognized bytes appear as ILLEGAL tokens; lexing never aborts.");
    println!();
    println!("EXAMPLES:");
    println!("    {} example.monkey                # Plain token listing", program_name);
    println!("    {} example.monkey --json         # JSON output", program_name);
    println!("    {} example.monkey --strict       # Fail on ILLEGAL tokens", program_name);
}

fn parse_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        input_path: args[1].clone(),
        json_output: false,
        quiet: false,
        strict: false,
        config_path: None,
    };

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                options.json_output = true;
            }
            "--quiet" => {
                options.quiet = true;
            }
            "--strict" => {
                options.strict = true;
            }
            "--config" => {
                if i + 1 < args.len() {
                    options.config_path = Some(args[i + 1].clone());
                    i += 1; // Skip the path argument
                } else {
                    eprintln!("Warning: --config requires a file path");
                }
            }
            _ => {
                eprintln!("Warning: Unknown option '{}'", args[i]);
            }
        }
        i += 1;
    }

    options
}

fn print_metrics_summary(metrics: &monkey_lexer::LexicalMetrics, file_path: &str) {
    println!();
    println!("=== Tokenization Summary ===");
    println!("File: {}", file_path);
    println!("Total tokens:      {}", metrics.total_tokens);
    println!("  Keywords:        {}", metrics.keyword_tokens);
    println!("  Identifiers:     {}", metrics.identifier_tokens);
    println!("  Integers:        {}", metrics.integer_tokens);
    println!("  Operators:       {}", metrics.operator_tokens);
    println!("  Delimiters:      {}", metrics.delimiter_tokens);
    println!("  Illegal:         {}", metrics.illegal_tokens);

    if !metrics.operator_usage_patterns.is_empty() {
        println!("Operator usage:");
        let mut patterns: Vec<_> = metrics.operator_usage_patterns.iter().collect();
        patterns.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        for (operator, count) in patterns {
            println!("  {:<4} {}", operator, count);
        }
    }
}
