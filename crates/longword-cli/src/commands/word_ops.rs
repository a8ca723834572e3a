use std::path::Path;

use longword_core::analyze::Vocabulary;
use longword_core::decompose::Decomposer;
use longword_core::index::validate_word;
use longword_core::settings::Settings;

fn open_vocab(file: &str, settings: &Settings) -> Vocabulary {
    die!(
        Vocabulary::open(Path::new(file), &settings.input),
        "Error loading {file}: {}"
    )
}

pub fn stats(file: &str, settings: &Settings) {
    let vocab = open_vocab(file, settings);
    let s = vocab.stats();
    println!("lines:       {}", s.lines);
    println!("words:       {}", s.words);
    println!("skipped:     {}", s.skipped);
    println!("rejected:    {}", s.rejected);
    println!("duplicates:  {}", s.duplicates);
    println!("candidates:  {}", s.candidates);
    println!("trie nodes:  {}", s.nodes);
}

pub fn lookup(file: &str, word: &str, settings: &Settings) {
    let vocab = open_vocab(file, settings);
    let index = vocab.index();
    println!("{word}");
    println!("  word:   {}", yes_no(index.contains_exact(word)));
    println!("  prefix: {}", yes_no(index.has_prefix(word)));
}

/// Show one way `word` splits into other words of the list.
pub fn segment(file: &str, word: &str, settings: &Settings) {
    die!(validate_word(word), "Error: {}");
    let vocab = open_vocab(file, settings);
    let mut decomposer = Decomposer::new(vocab.index());
    match decomposer.split_compound(word) {
        Some(parts) => println!("{word} = {}", parts.join(" + ")),
        None => println!("{word}: not a concatenation of other words"),
    }
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}
