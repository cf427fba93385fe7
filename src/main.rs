//! # Dynamic text image generator
//!
//! Reads one text entry at a time, renders it onto a white canvas with
//! the configured font and saves it as a numbered image file. The loop
//! survives every per-request failure; only `exit` or end of input
//! ends the session.

mod cli;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use cli::Options;
use color_eyre::eyre::{self, Context};
use log::error;
use typeset::{render_to_file, RenderError, RenderRequest};

/// Classification of one line read from the operator
#[derive(Debug, PartialEq, Eq)]
enum Entry<'a> {
    /// The operator asked to quit
    Exit,
    /// Nothing to render; does not advance the output counter
    Empty,
    /// A trimmed text entry to render
    Text(&'a str),
}

impl<'a> Entry<'a> {
    fn parse(line: &'a str) -> Self {
        let text = line.trim();
        if text.eq_ignore_ascii_case("exit") {
            Entry::Exit
        } else if text.is_empty() {
            Entry::Empty
        } else {
            Entry::Text(text)
        }
    }
}

fn request(opt: &Options, text: &str, output_path: PathBuf) -> RenderRequest {
    RenderRequest {
        text: text.to_owned(),
        font_path: opt.font.clone(),
        font_size: opt.font_size,
        output_path,
        margin: opt.margin,
        initial_width: opt.width,
        initial_height: opt.height,
    }
}

fn interactive(opt: &Options) -> eyre::Result<()> {
    println!("Dynamic Text Image Generator");
    println!("Type 'exit' to stop the program.\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    let mut counter = 1u32;

    loop {
        print!("Enter your text (or type 'exit' to quit): ");
        io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            // end of input
            break;
        }
        match Entry::parse(&line) {
            Entry::Exit => {
                println!("Exiting the program. Goodbye!");
                break;
            }
            Entry::Empty => {
                println!("Text cannot be empty. Please try again.");
            }
            Entry::Text(text) => {
                let output = PathBuf::from(format!("{}_{}.jpg", opt.out_base, counter));
                match render_to_file(&request(opt, text, output.clone())) {
                    Ok(()) => {
                        println!("Image saved as '{}'", output.display());
                        counter += 1;
                    }
                    Err(e @ RenderError::FontNotFound(_)) => error!("{}", e),
                    Err(e) => error!("An unexpected error occurred: {}", e),
                }
            }
        }
    }
    Ok(())
}

fn main() -> eyre::Result<()> {
    let opt: Options = cli::init()?;

    if let Some(text) = opt.text.as_deref() {
        let output = opt
            .out
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}_1.jpg", opt.out_base)));
        render_to_file(&request(&opt, text, output.clone()))
            .wrap_err_with(|| format!("failed to render '{}'", output.display()))?;
        println!("Image saved as '{}'", output.display());
        return Ok(());
    }

    interactive(&opt)
}

#[cfg(test)]
mod tests {
    use super::Entry;

    #[test]
    fn exit_is_case_insensitive() {
        assert_eq!(Entry::Exit, Entry::parse("exit\n"));
        assert_eq!(Entry::Exit, Entry::parse("  EXIT  \n"));
    }

    #[test]
    fn blank_entries_are_rejected() {
        assert_eq!(Entry::Empty, Entry::parse("\n"));
        assert_eq!(Entry::Empty, Entry::parse("   \t  \n"));
    }

    #[test]
    fn text_entries_are_trimmed() {
        assert_eq!(Entry::Text("hello world"), Entry::parse("  hello world \n"));
    }
}
