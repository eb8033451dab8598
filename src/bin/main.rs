use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use jcst::parser::{self as jparser, Lexer, ParseResult};
use jcst::{cst, ParserConfig};
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jcst")]
#[command(about = "Java concrete syntax tree parser")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse source with one grammar rule and print the tree
    Parse {
        /// Input file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Source text given inline instead of a file
        #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
        expr: Option<String>,

        /// Grammar rule to start from
        #[arg(short, long, value_enum, default_value_t = Rule::Expression)]
        rule: Rule,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Print the token stream
    Lex {
        /// Input file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Source text given inline instead of a file
        #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
        expr: Option<String>,

        /// Show token locations
        #[arg(short, long)]
        locations: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Rule {
    Expression,
    ParExpression,
    ForControl,
    TypeParameter,
    TypeParameters,
    Type,
    LocalVariableDeclaration,
    Block,
    Statement,
    Modifiers,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Text,
    Debug,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { input, expr, rule, format } => {
            let source = read_source(input, expr)?;
            let config = ParserConfig::from_env()?;
            parse_source(&source, config, rule, format)?;
        }
        Commands::Lex { input, expr, locations } => {
            let source = read_source(input, expr)?;
            lex_source(&source, locations)?;
        }
    }

    Ok(())
}

fn read_source(input: Option<PathBuf>, expr: Option<String>) -> Result<String> {
    match (input, expr) {
        (_, Some(text)) => Ok(text),
        (Some(path), None) => Ok(fs::read_to_string(path)?),
        (None, None) => bail!("either FILE or --expr is required"),
    }
}

fn parse_source(source: &str, config: ParserConfig, rule: Rule, format: Format) -> Result<()> {
    match rule {
        Rule::Expression => emit(jparser::parse_expression(source, config), format),
        Rule::ParExpression => emit(jparser::parse_par_cast_or_lambda_expression(source, config), format),
        Rule::ForControl => emit(jparser::parse_for_control(source, config), format),
        Rule::TypeParameter => emit(jparser::parse_type_parameter(source, config), format),
        Rule::TypeParameters => emit(jparser::parse_type_parameters(source, config), format),
        Rule::Type => emit(jparser::parse_type_type(source, config), format),
        Rule::LocalVariableDeclaration => emit(jparser::parse_local_variable_declaration(source, config), format),
        Rule::Block => emit(jparser::parse_block(source, config), format),
        Rule::Statement => emit(jparser::parse_statement(source, config), format),
        Rule::Modifiers => {
            let modifiers = jparser::parse_modifiers(source, config)?;
            match format {
                Format::Json => println!("{}", cst::to_json(&modifiers)?),
                Format::Text => {
                    let text: Vec<String> = modifiers.iter().map(ToString::to_string).collect();
                    println!("{}", text.join(" "));
                }
                Format::Debug => println!("{:#?}", modifiers),
            }
            Ok(())
        }
    }
}

fn emit<T: Serialize + Display + Debug>(node: ParseResult<T>, format: Format) -> Result<()> {
    let node = node?;
    match format {
        Format::Json => println!("{}", cst::to_json(&node)?),
        Format::Text => println!("{}", node),
        Format::Debug => println!("{:#?}", node),
    }
    Ok(())
}

fn lex_source(source: &str, locations: bool) -> Result<()> {
    let tokens = Lexer::new(source).tokenize().map_err(|e| anyhow::anyhow!("Lexical error: {}", e))?;

    for token in tokens {
        if locations {
            println!("{:?} '{}' at {}", token.token_type(), token.lexeme(), token.span());
        } else {
            println!("{:?}: '{}'", token.token_type(), token.lexeme());
        }
    }

    Ok(())
}
