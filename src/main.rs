extern crate unique_avl;

use simplelog::{Config as LogConfig, LevelFilter, SimpleLogger};
use std::collections::VecDeque;
use std::env;
use std::fmt;
use std::io::{self, BufRead, Write};
use unique_avl::avl_tree::{BalancedTree, Config, TraversalOrder};

/// Whitespace separated tokens read from stdin.
struct Tokens<R> {
    lines: io::Lines<R>,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Tokens {
            lines: input.lines(),
            pending: VecDeque::new(),
        }
    }

    fn next(&mut self) -> Option<String> {
        while self.pending.is_empty() {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                _ => return None,
            };
            self.pending.extend(line.split_whitespace().map(String::from));
        }
        self.pending.pop_front()
    }
}

#[derive(Debug)]
struct InvalidInput(String);

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid input: {}", self.0)
    }
}

fn parse_key(token: &str) -> Result<i32, InvalidInput> {
    token.parse().map_err(|_| InvalidInput(token.to_string()))
}

fn prompt(text: &str) {
    print!("{}", text);
    let _ = io::stdout().flush();
}

fn delete<R: BufRead>(tree: &mut BalancedTree, tokens: &mut Tokens<R>) -> Option<()> {
    prompt("Enter the number to delete: ");
    let token = tokens.next()?;
    match parse_key(&token) {
        Ok(key) => {
            tree.delete(key);
        },
        Err(err) => println!("{}", err),
    }
    Some(())
}

fn export(tree: &BalancedTree) {
    let keys = tree.to_array();
    println!("\n==============================");
    let row: Vec<String> = keys.iter().map(|key| format!("{}  ", key)).collect();
    println!("1-D Array Representation: {}", row.concat());
    println!("\t\t\t\t  Index: {:?}", (0..keys.len()).collect::<Vec<usize>>());
    println!("\n==============================");

    for order in TraversalOrder::ALL.iter() {
        let keys: Vec<String> = tree.traverse(*order).iter().map(|key| format!("{} ", key)).collect();
        println!("{} traversal:", order);
        println!("[{}]", keys.concat());
    }
}

// Returns `None` once stdin is exhausted.
fn insert_mode<R: BufRead>(tree: &mut BalancedTree, tokens: &mut Tokens<R>) -> Option<()> {
    loop {
        prompt("Enter a number to insert (or type 'X' to stop inserting, 'D' to delete):\t");
        let token = tokens.next()?;
        match token.as_str() {
            "X" => {
                export(tree);
                prompt("Do you want to try again? (Type 'Y' to continue, any other input to end):\t");
                if tokens.next()? != "Y" {
                    return Some(());
                }
            },
            "D" => delete(tree, tokens)?,
            _ => match parse_key(&token) {
                // duplicates are reported through the log
                Ok(key) => {
                    let _ = tree.insert_unique(key);
                },
                Err(err) => println!("{}. Please enter an integer or 'X' to stop inserting, 'D' to delete.", err),
            },
        }
    }
}

fn main() {
    let mut config = Config::default();
    let mut level = LevelFilter::Info;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--reference" => config = Config::reference(),
            "-v" => level = LevelFilter::Debug,
            _ => eprintln!("ignoring unknown argument {}", arg),
        }
    }
    if let Err(err) = SimpleLogger::init(level, LogConfig::default()) {
        eprintln!("failed to initialize logger: {}", err);
    }

    let stdin = io::stdin();
    let mut tokens = Tokens::new(stdin.lock());

    loop {
        let mut tree = BalancedTree::with_config(config);
        println!("==============================");
        println!("Type [1] to Insert");
        println!("Type [2] to Delete");
        println!("Type [3] to End");
        prompt("Choice:\t");

        let choice = match tokens.next() {
            Some(choice) => choice,
            None => break,
        };
        let done = match choice.chars().next() {
            Some('1') => insert_mode(&mut tree, &mut tokens).is_none(),
            Some('2') => delete(&mut tree, &mut tokens).is_none(),
            Some('3') => true,
            _ => {
                println!("Invalid choice, please try again.");
                false
            },
        };
        if done {
            break;
        }
    }
    println!("Program ended.");
}
