//! Translates a fixed set of inputs and prints `입력:`/`번역:` pairs.
//!
//! Run with `cargo run --example harness`.

use tuacavo::Translator;

const CASES: &[&str] = &[
    "{ImAcapo(Pinrun(move)) @Uecas}",
    "Z",
    "T1800",
    "{ImAcapo @Uecas}",
    "A~a'B",
    "Pu3",
    "Aca ~sa' Zas en Za2 Mu41",
    "Lam R Ecuo",
    "Ym Zaa ?",
    "Ka eth Ra!",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let translator = Translator::default();

    println!("## Tuacavo → 한국어 ##\n");
    for input in CASES {
        match translator.translate(input) {
            Ok(output) => println!("입력: {input}\n번역: {output}\n"),
            Err(e) => println!("입력: {input}\n오류: {e}\n"),
        }
    }
}
