use std::io::{self, Write};

use super::library::Library;
use crate::modules::utils::io::Prompter;

/// Run the interactive catalog shell until `quit` or end of input
pub fn run_library_shell<P: Prompter, W: Write>(
    library: &mut Library,
    input: &mut P,
    out: &mut W,
) -> io::Result<()> {
    loop {
        let Some(command) = input.line("Enter command (add, search, borrow, return, quit): ")?
        else {
            return Ok(());
        };

        let finished = match command.trim() {
            "add" => handle_add(library, input, out)?,
            "search" => handle_search(library, input, out)?,
            "borrow" => handle_borrow(library, input, out)?,
            "return" => handle_return(library, input, out)?,
            "quit" | "exit" => return Ok(()),
            "" => false,
            _ => {
                writeln!(out, "Invalid command, please try again")?;
                false
            }
        };
        if finished {
            return Ok(());
        }
    }
}

// Each handler returns true when input ended before the command completed.

fn handle_add<P: Prompter, W: Write>(
    library: &mut Library,
    input: &mut P,
    out: &mut W,
) -> io::Result<bool> {
    let Some(title) = input.line("Title: ")? else {
        return Ok(true);
    };
    let Some(author) = input.line("Author: ")? else {
        return Ok(true);
    };
    let Some(year) = input.line("Publication year: ")? else {
        return Ok(true);
    };

    let year: i32 = match year.trim().parse() {
        Ok(year) => year,
        Err(_) => {
            writeln!(out, "Invalid year: {}", year.trim())?;
            return Ok(false);
        }
    };

    match library.add_book(&title, &author, year) {
        Ok(()) => writeln!(out, "Book added")?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(false)
}

fn handle_search<P: Prompter, W: Write>(
    library: &Library,
    input: &mut P,
    out: &mut W,
) -> io::Result<bool> {
    let Some(keyword) = input.line("Title or author to search for: ")? else {
        return Ok(true);
    };

    let results = library.search(&keyword);
    if results.is_empty() {
        writeln!(out, "No matching books found")?;
    } else {
        writeln!(out, "Found {} book(s):", results.len())?;
        for book in results {
            writeln!(out, "{}", book)?;
        }
    }
    Ok(false)
}

fn handle_borrow<P: Prompter, W: Write>(
    library: &mut Library,
    input: &mut P,
    out: &mut W,
) -> io::Result<bool> {
    let Some(title) = input.line("Title to borrow: ")? else {
        return Ok(true);
    };
    match library.borrow_book(&title) {
        Ok(()) => writeln!(out, "Book borrowed")?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(false)
}

fn handle_return<P: Prompter, W: Write>(
    library: &mut Library,
    input: &mut P,
    out: &mut W,
) -> io::Result<bool> {
    let Some(title) = input.line("Title to return: ")? else {
        return Ok(true);
    };
    match library.return_book(&title) {
        Ok(()) => writeln!(out, "Book returned")?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(false)
}
