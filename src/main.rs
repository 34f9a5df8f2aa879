//! CLI entry point: read a board size, run the search, print the board.

use std::io::{self, BufRead};

use evoqueens::{SearchConfig, SearchRunner};

fn main() -> io::Result<()> {
    println!("How many queens? (4-100)");

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let n = match line.trim().parse::<usize>() {
        Ok(n) if (4..=100).contains(&n) => n,
        _ => {
            println!("Must be between 4 and 100");
            return Ok(());
        }
    };

    let config = SearchConfig::default();
    let result = SearchRunner::run_with_observer(n, &config, |generation, score| {
        println!("generation {generation}: score = {score}");
    });

    if result.solved {
        println!("Solved puzzle!");
    }
    println!("Final state is:");
    print!("{}", result.board.render());
    Ok(())
}
