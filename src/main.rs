use std::{env, fs::read_to_string, time::Instant};

use lexan::scanner::{
    scanner::tokenize,
    tokens::{Token, TokenKind},
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();
    let tokens = tokenize(&file_contents);
    println!("Tokenized in {:?}", start.elapsed());

    for token in &tokens {
        token.debug();
    }

    for token in tokens.iter().filter(|token| token.kind == TokenKind::Error) {
        display_error(token, &file_contents, file_path);
    }

    println!("{} tokens", tokens.len());
}

fn display_error(token: &Token, source: &str, file: &str) {
    /*
        -> final.lang
           |
        20 | int a = #;
           | --------^
    */

    let line = token.position.line as usize;
    let column = token.position.column as usize;

    if line == 0 {
        return;
    }
    let line_text = match source.lines().nth(line - 1) {
        Some(text) => text,
        None => return,
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("-> {}", file);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = column.saturating_sub(removed_whitespace).max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
