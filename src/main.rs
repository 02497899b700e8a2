use morse_decoding::input::{InputError, Puzzle};
use morse_decoding::morse::MorseTable;
use morse_decoding::{Count, Decoder, Trie};
use std::io;
use std::process::ExitCode;

#[derive(thiserror::Error, Debug)]
enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
}

fn run() -> Result<Count, Error> {
    let puzzle = Puzzle::parse(io::stdin().lock())?;
    let trie = Trie::from_words(&puzzle.words);
    let table = MorseTable::new();
    Ok(Decoder::new(&trie, &table, &puzzle.message).count())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(count) => {
            println!("{count}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
