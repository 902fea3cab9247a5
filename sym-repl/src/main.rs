mod error;

use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufRead, BufReader, IsTerminal}};
use sym_compute::symbolic::{derivative, integrate, simplify, Expr};
use sym_parser::parser::{ast::Expr as AstExpr, Parser};
use tracing_subscriber::EnvFilter;

const DIFF_USAGE: &str = "diff <variable> <expression>";
const INTEGRATE_USAGE: &str = "integrate <variable> <expression>";

/// An operation to run on an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'a> {
    /// `simplify <expr>`, or just `<expr>`
    Simplify,

    /// `diff <var> <expr>`
    Diff(&'a str),

    /// `integrate <var> <expr>`
    Integrate(&'a str),
}

/// Splits the first whitespace-separated word off the input.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    input.split_once(char::is_whitespace).unwrap_or((input, ""))
}

/// Splits a line of input into the command and the source of its expression.
fn parse_command(line: &str) -> Result<(Command<'_>, &str), Error> {
    let (word, rest) = split_word(line);
    let usage = match word {
        "simplify" => return Ok((Command::Simplify, rest)),
        "diff" => DIFF_USAGE,
        "integrate" => INTEGRATE_USAGE,
        _ => return Ok((Command::Simplify, line)),
    };

    let (var, source) = split_word(rest);
    if var.is_empty() || source.trim().is_empty() {
        return Err(Error::Usage(usage));
    }

    let command = if word == "diff" { Command::Diff(var) } else { Command::Integrate(var) };
    Ok((command, source))
}

/// Parses the source into an expression and runs the command on it.
fn run(command: Command<'_>, source: &str) -> Result<Expr, Error> {
    let ast = Parser::new(source).try_parse_full::<AstExpr>()?;
    let expr = Expr::try_from(ast)?;
    let result = match command {
        Command::Simplify => simplify(&expr)?,
        Command::Diff(var) => derivative(&expr, var)?,
        Command::Integrate(var) => integrate(&expr, var)?,
    };
    Ok(result)
}

/// Runs a single line of input, printing the result or reporting the error.
fn process_line(line: &str) {
    if line.trim().is_empty() {
        return;
    }

    let (result, source) = match parse_command(line) {
        Ok((command, source)) => (run(command, source), source),
        Err(err) => (Err(err), line),
    };

    match result {
        Ok(expr) => println!("{}", expr),
        Err(err) => if let Err(io_err) = err.report_to_stderr(source) {
            eprintln!("failed to report error: {}", io_err);
        },
    }
}

/// Runs every line of the given reader.
fn process_lines(reader: impl BufRead) {
    for line in reader.lines() {
        match line {
            Ok(line) => process_line(&line),
            Err(err) => {
                eprintln!("{}", err);
                break;
            },
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run each line of the source file
        match File::open(&filename) {
            Ok(file) => process_lines(BufReader::new(file)),
            Err(err) => {
                eprintln!("could not open `{}`: {}", filename, err);
                std::process::exit(1);
            },
        }
    } else if !io::stdin().is_terminal() {
        // read lines from stdin
        process_lines(io::stdin().lock());
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("could not start the interactive prompt: {}", err);
                std::process::exit(1);
            },
        };

        fn read_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            process_line(&input);
            Ok(())
        }

        loop {
            if let Err(err) = read_line(&mut rl) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn commands() {
        assert_eq!(parse_command("x + x").unwrap(), (Command::Simplify, "x + x"));
        assert_eq!(parse_command("simplify x + x").unwrap(), (Command::Simplify, "x + x"));
        assert_eq!(parse_command("diff x x^2").unwrap(), (Command::Diff("x"), "x^2"));
        assert_eq!(
            parse_command("integrate  t  sin(t) * cos(t)").unwrap(),
            (Command::Integrate("t"), " sin(t) * cos(t)"),
        );
        assert!(matches!(parse_command("diff x"), Err(Error::Usage(DIFF_USAGE))));
    }

    #[test]
    fn run_commands() {
        assert_eq!(run(Command::Simplify, "3*x + 2*x").unwrap().to_string(), "5 * x");
        assert_eq!(run(Command::Diff("x"), "sin(x)*cos(x)*2").unwrap().to_string(), "2 * cos(2 * x)");
        assert_eq!(run(Command::Integrate("x"), "x*exp(x^2+1)").unwrap().to_string(), "0.5 * exp(1 + x^2)");
        assert!(matches!(run(Command::Simplify, "2x"), Err(Error::ParseError(_))));
        assert!(matches!(run(Command::Integrate("x"), "exp(x^2)"), Err(Error::ComputeError(_))));
    }
}
