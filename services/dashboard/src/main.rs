mod session;

use newscheck_config::{init_tracing, AppConfig};
use newscheck_model::engine::Prediction;
use newscheck_model::loader::{ArtifactPaths, ModelContext};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use session::{Session, EXAMPLE_ARTICLES, MIN_ARTICLE_CHARS};

/// The dashboard echoes a longer slice of the article than the API does.
const PREVIEW_CHARS: usize = 200;

fn main() {
    let config = AppConfig::from_env().expect("failed to load config");
    init_tracing(&config.log_level);

    let paths = ArtifactPaths::new(&config.model_dir);
    let model = match ModelContext::load(&paths) {
        Ok(ctx) => Arc::new(ctx),
        Err(e) => {
            tracing::error!(error = %e, "cannot start without model artifacts");
            std::process::exit(1);
        }
    };

    let mut session = Session::new(model);
    print_banner(&session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "failed to read input");
                break;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            ":quit" | ":q" => break,
            ":help" => print_help(),
            ":info" => print_info(&session),
            ":examples" => print_examples(),
            ":last" => match session.last() {
                Some((text, prediction)) => render(text, prediction),
                None => println!("nothing analyzed yet"),
            },
            _ => {
                let text = if let Some(arg) = input.strip_prefix(":example ") {
                    match arg.trim().parse::<usize>() {
                        Ok(n) if (1..=EXAMPLE_ARTICLES.len()).contains(&n) => {
                            EXAMPLE_ARTICLES[n - 1].0.to_string()
                        }
                        _ => {
                            println!("usage: :example <1-{}>", EXAMPLE_ARTICLES.len());
                            continue;
                        }
                    }
                } else {
                    input.to_string()
                };

                match session.analyze(&text) {
                    Ok(prediction) => render(&text, &prediction),
                    Err(e) => println!("cannot analyze: {e}"),
                }
            }
        }
    }

    println!("bye");
}

fn print_banner(session: &Session) {
    println!("Newscheck Fake News Detector — interactive dashboard");
    println!(
        "model loaded: {} features (max {})",
        session.model().n_features(),
        session.model().vectorizer.max_features
    );
    println!("paste an article to analyze it, or :help for commands");
    println!();
}

fn print_help() {
    println!("commands:");
    println!("  <article text>   analyze an article (minimum {MIN_ARTICLE_CHARS} characters)");
    println!("  :example <n>     analyze one of the canned example articles");
    println!("  :examples        list the canned example articles");
    println!("  :last            show the previous result again");
    println!("  :info            show model information");
    println!("  :quit            exit");
}

fn print_info(session: &Session) {
    let model = session.model();
    println!("model: linear classifier over TF-IDF features");
    println!("features: {}", model.n_features());
    println!("max features: {}", model.vectorizer.max_features);
    println!("classes: 0 = Fake News, 1 = Reliable News");
}

fn print_examples() {
    for (i, (text, expected)) in EXAMPLE_ARTICLES.iter().enumerate() {
        println!("{}. [{expected}] {text}", i + 1);
    }
}

fn render(text: &str, prediction: &Prediction) {
    let marker = if prediction.code == 1 { "✔" } else { "✘" };
    println!();
    println!("{marker} {} ({:.2}% confidence)", prediction.label, prediction.confidence);
    println!(
        "   fake: {:.2}%  |  reliable: {:.2}%",
        prediction.probabilities.fake, prediction.probabilities.reliable
    );
    println!("   {} characters analyzed", text.chars().count());
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        println!("   {head}...");
    } else {
        println!("   {text}");
    }
    println!();
}
