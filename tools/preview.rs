/// Preview — interactive translation shell.
///
/// Usage: preview [--dictionary <path.ron>]... [--seed <n>] [input...]
///
/// With positional inputs, each is translated and the tool exits.
///
/// Commands:
///   <input>          — translate a line
///   :tree <input>    — print the parse tree
///   :tokens <input>  — print the token stream
///   :dict <tag>      — look up and decompose a tag
///   :sample <n>      — translate n generated sentences
///   :help            — list commands
///   :quit            — exit

use std::io::{self, BufRead, Write};
use std::process;
use tracing_subscriber::EnvFilter;
use tuacavo::core::decompose::{Decomposer, Segment};
use tuacavo::core::lexer::tokenize;
use tuacavo::core::sampler::TagSampler;
use tuacavo::Translator;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut dictionary_paths = Vec::new();
    let mut seed: u64 = 42;
    let mut inputs = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return;
            }
            "--dictionary" if i + 1 < args.len() => {
                i += 1;
                dictionary_paths.push(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            arg if arg.starts_with("--") => {
                eprintln!("Unknown argument: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => inputs.push(args[i].clone()),
        }
        i += 1;
    }

    let mut builder = Translator::builder();
    for path in &dictionary_paths {
        builder = builder.dictionary_path(path);
    }
    let translator = match builder.build() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    if !inputs.is_empty() {
        let mut failed = false;
        for input in &inputs {
            failed |= !print_translation(&translator, input);
        }
        process::exit(if failed { 1 } else { 0 });
    }

    println!("Loaded {} dictionary entries", translator.dictionary().len());
    println!("Seed: {}", seed);
    println!("Type ':help' for commands.\n");

    let mut sampler = TagSampler::new(translator.dictionary(), seed);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("tuacavo> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if !line.starts_with(':') {
            print_translation(&translator, line);
            continue;
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            ":quit" | ":q" | ":exit" => break,
            ":help" | ":h" => print_help(),
            ":tree" => match translator.parse(rest) {
                Ok(doc) => println!("{:#?}", doc),
                Err(e) => println!("ERROR: {}", e),
            },
            ":tokens" => match tokenize(rest) {
                Ok(tokens) => {
                    for token in tokens {
                        println!(
                            "  {:>4}  {:<20} {:?}",
                            token.offset,
                            token.kind.describe(),
                            token.text
                        );
                    }
                }
                Err(e) => println!("ERROR: {}", e),
            },
            ":dict" => {
                if rest.is_empty() {
                    println!("Usage: :dict <tag>");
                    continue;
                }
                print_lookup(&translator, rest);
            }
            ":sample" => {
                let count: usize = match rest.parse() {
                    Ok(n) if n > 0 => n,
                    _ => {
                        println!("Usage: :sample <n>");
                        continue;
                    }
                };
                for sentence in sampler.sentences(count) {
                    print_translation(&translator, &sentence);
                }
            }
            _ => println!("Unknown command: {}. Type ':help' for commands.", cmd),
        }
    }
}

/// Print an `입력:`/`번역:` pair. Returns whether translation succeeded.
fn print_translation(translator: &Translator, input: &str) -> bool {
    println!("입력: {}", input);
    match translator.translate(input) {
        Ok(output) => {
            println!("번역: {}\n", output);
            true
        }
        Err(e) => {
            println!("오류: {}\n", e);
            false
        }
    }
}

fn print_lookup(translator: &Translator, tag: &str) {
    let decomposer = Decomposer::new(translator.dictionary());
    if let Some(fragment) = translator.dictionary().get(tag) {
        println!("  {} => {:?}", tag, fragment);
        return;
    }
    println!("  {} (not a key)", tag);
    for segment in decomposer.segment(tag) {
        let label = match &segment {
            Segment::Known(key) => format!("key {}", key),
            Segment::Time { .. } => "time".to_string(),
            Segment::Certain { root, marker } => format!("certain {} + {}", root, marker),
            Segment::Unknown(text) => format!("unknown {}", text),
        };
        println!("    {:<24} {:?}", label, decomposer.render_segment(&segment));
    }
    println!("  => {:?}", decomposer.render(tag));
}

fn print_usage() {
    println!("Usage: preview [--dictionary <path.ron>]... [--seed <n>] [input...]");
}

fn print_help() {
    println!("Commands:");
    println!("  <input>          translate a line");
    println!("  :tree <input>    print the parse tree");
    println!("  :tokens <input>  print the token stream");
    println!("  :dict <tag>      look up and decompose a tag");
    println!("  :sample <n>      translate n generated sentences");
    println!("  :help            list commands");
    println!("  :quit            exit");
}
