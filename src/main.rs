use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use colored::Colorize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use perflang::error::{DiagnosticError, PerfError};
use perflang::lexer::tokenize;
use perflang::parser::Parser as PerfParser;
use perflang::tokenconv;

#[derive(Parser)]
#[command(name = "perflang")]
#[command(author, version, about = "The Perfection language front end", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a Perfection source file and print the token stream
    Lex {
        /// The source file to tokenize
        input: PathBuf,
    },

    /// Parse a Perfection source file and dump the AST as JSON
    Parse {
        /// The source file to parse
        input: PathBuf,
    },

    /// Start an interactive session tokenizing one line at a time
    Repl,

    /// Convert a token declaration block into string-table rows
    Tokenconv {
        /// Declaration block to convert: a file path, `-` for stdin,
        /// or nothing for the embedded block
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Some(Commands::Lex { input }) => lex(input),
        Some(Commands::Parse { input }) => parse(input),
        Some(Commands::Repl) | None => repl(),
        Some(Commands::Tokenconv { input }) => tokenconv_cmd(input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Source text registered for diagnostic rendering
struct SourceState {
    source: String,
    files: SimpleFiles<String, String>,
    file_id: usize,
}

impl SourceState {
    fn from_file(path: &PathBuf) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {:?}", path))?;
        Ok(Self::new(path.display().to_string(), source))
    }

    fn new(name: String, source: String) -> Self {
        let mut files = SimpleFiles::new();
        let file_id = files.add(name, source.clone());
        Self {
            source,
            files,
            file_id,
        }
    }

    fn report_error(&self, error: PerfError) -> Result<()> {
        let diagnostic = DiagnosticError::new(error, self.file_id).to_diagnostic();
        let writer = StandardStream::stderr(ColorChoice::Always);
        let config = codespan_reporting::term::Config::default();
        codespan_reporting::term::emit(&mut writer.lock(), &config, &self.files, &diagnostic)?;
        Ok(())
    }
}

fn lex(input: PathBuf) -> Result<()> {
    let state = SourceState::from_file(&input)?;

    log::debug!("tokenizing {:?}", input);
    let tokens = match tokenize(&state.source) {
        Ok(tokens) => tokens,
        Err(e) => {
            state.report_error(e.into())?;
            anyhow::bail!("Lexical analysis failed");
        }
    };

    print_tokens(&tokens);
    Ok(())
}

fn parse(input: PathBuf) -> Result<()> {
    let state = SourceState::from_file(&input)?;

    log::debug!("tokenizing {:?}", input);
    let tokens = match tokenize(&state.source) {
        Ok(tokens) => tokens,
        Err(e) => {
            state.report_error(e.into())?;
            anyhow::bail!("Lexical analysis failed");
        }
    };

    log::debug!("parsing {} tokens", tokens.len());
    let mut parser = PerfParser::new(tokens);
    let ast = match parser.parse() {
        Ok(program) => program,
        Err(e) => {
            state.report_error(e.into())?;
            anyhow::bail!("Parsing failed");
        }
    };

    println!("{}", serde_json::to_string_pretty(&ast)?);
    Ok(())
}

fn repl() -> Result<()> {
    println!("{}", "Perfection REPL".blue().bold());
    println!("Each line is tokenized as entered; a blank line exits\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("perf> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches('\n').trim_end_matches('\r');

        // A blank line ends the session
        if line.trim().is_empty() {
            break;
        }

        let state = SourceState::new("<repl>".to_string(), line.to_string());
        match tokenize(&state.source) {
            Ok(tokens) => print_tokens(&tokens),
            // Unlike file mode, the session survives errors
            Err(e) => state.report_error(e.into())?,
        }
    }

    Ok(())
}

fn tokenconv_cmd(input: Option<PathBuf>) -> Result<()> {
    let block = match input {
        None => tokenconv::TOKEN_DECLARATIONS.to_string(),
        Some(path) if path.as_os_str() == "-" => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read declaration block from stdin")?;
            buffer
        }
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read declaration block: {:?}", path))?,
    };

    for row in tokenconv::convert(&block) {
        println!("{}", row);
    }
    Ok(())
}

fn print_tokens(tokens: &[perflang::lexer::TokenWithPosition]) {
    for (idx, token) in tokens.iter().enumerate() {
        println!("Token {}/{}: {}", idx, tokens.len(), token.token.name());
    }
}
