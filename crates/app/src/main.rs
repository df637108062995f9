mod speech;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{Advance, AnswerOutcome, QuizEngine, QuizError, SpeechOutcome, SpeechService};
use storage::{BuiltinSource, JsonFileSource, VocabularySource, load_vocabulary};
use tracing_subscriber::EnvFilter;
use vocab_core::model::{MAX_QUESTIONS, Question, QuizResults, QuizSettings, VocabularyStore};

use crate::speech::{CommandBackend, TranscriptDisplay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SpeechMode {
    /// Use the speech command when installed, else print pronunciations.
    Auto,
    /// Always print pronunciations.
    Display,
    /// No pronunciation help.
    Off,
}

#[derive(Debug, Parser)]
#[command(name = "vocab-quiz", about = "Multiple-choice vocabulary quiz in the terminal")]
struct Cli {
    /// Vocabulary JSON file (defaults to the bundled Mongolian set)
    #[arg(long, env = "VOCAB_DATA")]
    data: Option<PathBuf>,
    /// Questions per quiz (1-15)
    #[arg(long, env = "VOCAB_QUESTIONS", default_value_t = MAX_QUESTIONS)]
    questions: u32,
    /// Seed for a reproducible question order
    #[arg(long, env = "VOCAB_SEED")]
    seed: Option<u64>,
    /// Pronunciation mode
    #[arg(long, value_enum, default_value_t = SpeechMode::Auto)]
    speech: SpeechMode,
    /// espeak-compatible speech command
    #[arg(long, default_value = "espeak-ng")]
    speech_command: String,
    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(2);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = QuizSettings::new(cli.questions)?;

    let source: Box<dyn VocabularySource> = match &cli.data {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(BuiltinSource),
    };
    let store = load_vocabulary(source.as_ref());

    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut engine = QuizEngine::with_rng(&settings, rng);

    let speech = match cli.speech {
        SpeechMode::Auto => Some(SpeechService::new(
            Arc::new(CommandBackend::new(cli.speech_command)),
            Arc::new(TranscriptDisplay),
        )),
        SpeechMode::Display => Some(SpeechService::display_only(Arc::new(TranscriptDisplay))),
        SpeechMode::Off => None,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_quiz(
        &mut engine,
        &store,
        speech.as_ref(),
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?;
    Ok(())
}

//
// ─── INPUT ─────────────────────────────────────────────────────────────────────
//

/// One line typed by the learner.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    /// 1-based option number.
    Choose(usize),
    /// Hear the 1-based option.
    Speak(usize),
    Continue,
    Restart,
    Quit,
    Unknown(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let lower = line.to_lowercase();
        match lower.as_str() {
            "" => Input::Continue,
            "r" | "restart" => Input::Restart,
            "q" | "quit" | "exit" => Input::Quit,
            other => {
                if let Some(n) = other
                    .strip_prefix('s')
                    .and_then(|rest| rest.trim().parse().ok())
                {
                    return Input::Speak(n);
                }
                other
                    .parse()
                    .map_or_else(|_| Input::Unknown(line.to_string()), Input::Choose)
            }
        }
    }
}

/// `None` on end of input.
fn read_input<B: BufRead, W: Write>(
    input: &mut B,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<Input>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(Input::parse(&line)))
}

//
// ─── QUIZ LOOP ─────────────────────────────────────────────────────────────────
//

enum Flow {
    Restart,
    Quit,
}

/// Run quizzes until the learner quits or input ends.
fn run_quiz<R, B, W>(
    engine: &mut QuizEngine<R>,
    store: &VocabularyStore,
    speech: Option<&SpeechService>,
    input: &mut B,
    out: &mut W,
) -> io::Result<()>
where
    R: rand::Rng,
    B: BufRead,
    W: Write,
{
    loop {
        if let Err(err) = engine.start(store) {
            writeln!(out, "Cannot start a quiz: {err}")?;
            return Ok(());
        }
        match play(engine, store, speech, input, out)? {
            Flow::Restart => writeln!(out, "\nStarting a new quiz.\n")?,
            Flow::Quit => return Ok(()),
        }
    }
}

fn play<R, B, W>(
    engine: &mut QuizEngine<R>,
    store: &VocabularyStore,
    speech: Option<&SpeechService>,
    input: &mut B,
    out: &mut W,
) -> io::Result<Flow>
where
    R: rand::Rng,
    B: BufRead,
    W: Write,
{
    loop {
        let Some(question) = engine.current_question().cloned() else {
            return Ok(Flow::Quit);
        };
        if let Some(progress) = engine.progress() {
            writeln!(
                out,
                "Question {} of {}  |  Score: {}",
                progress.position(),
                progress.total,
                progress.score
            )?;
        }
        render_question(out, &question)?;

        let outcome = loop {
            let Some(command) = read_input(input, out, "> ")? else {
                return Ok(Flow::Quit);
            };
            match command {
                Input::Choose(n) => match n.checked_sub(1).map(|i| engine.submit_option(i)) {
                    Some(Ok(outcome)) => break outcome,
                    Some(Err(QuizError::OutOfRangeOption { .. })) | None => {
                        let len = question.options().len();
                        writeln!(out, "Choose a number between 1 and {len}.")?;
                    }
                    Some(Err(err)) => writeln!(out, "{err}")?,
                },
                Input::Speak(n) => speak_option(out, speech, &question, n)?,
                Input::Restart => return Ok(Flow::Restart),
                Input::Quit => return Ok(Flow::Quit),
                Input::Continue | Input::Unknown(_) => render_help(out, question.options().len())?,
            }
        };
        render_feedback(out, &outcome)?;

        loop {
            let Some(command) = read_input(input, out, "Press Enter to continue. ")? else {
                return Ok(Flow::Quit);
            };
            match command {
                Input::Continue => break,
                Input::Speak(n) => speak_option(out, speech, &question, n)?,
                Input::Restart => return Ok(Flow::Restart),
                Input::Quit => return Ok(Flow::Quit),
                Input::Choose(_) | Input::Unknown(_) => {
                    writeln!(out, "This question is answered. Press Enter for the next one.")?;
                }
            }
        }

        match engine.advance() {
            Ok(Advance::Next(_)) => writeln!(out)?,
            Ok(Advance::Completed(results)) => {
                render_results(out, &results, store.language())?;
                return ask_play_again(input, out);
            }
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(Flow::Quit);
            }
        }
    }
}

fn ask_play_again<B: BufRead, W: Write>(input: &mut B, out: &mut W) -> io::Result<Flow> {
    write!(out, "Play again? [y/N] ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(match line.trim().to_lowercase().as_str() {
        "y" | "yes" | "r" => Flow::Restart,
        _ => Flow::Quit,
    })
}

fn speak_option<W: Write>(
    out: &mut W,
    speech: Option<&SpeechService>,
    question: &Question,
    n: usize,
) -> io::Result<()> {
    let Some(text) = n.checked_sub(1).and_then(|i| question.option(i)) else {
        return writeln!(out, "There is no option {n}.");
    };
    match speech.map(|speech| speech.speak(text)) {
        Some(SpeechOutcome::Spoken) => Ok(()),
        Some(SpeechOutcome::Displayed) => writeln!(out, "🔊 Pronunciation: {text}"),
        None => writeln!(out, "Pronunciation help is turned off."),
    }
}

//
// ─── RENDERING ─────────────────────────────────────────────────────────────────
//

fn render_question<W: Write>(out: &mut W, question: &Question) -> io::Result<()> {
    let category = question.category();
    writeln!(out, "{} {}", category.icon(), category.label())?;
    writeln!(out, "{}", question.prompt())?;
    for (i, option) in question.options().iter().enumerate() {
        writeln!(out, "  {}) {option}", i + 1)?;
    }
    Ok(())
}

fn render_help<W: Write>(out: &mut W, options: usize) -> io::Result<()> {
    writeln!(
        out,
        "Type 1-{options} to answer, \"s N\" to hear option N, \"r\" to restart or \"q\" to quit."
    )
}

fn render_feedback<W: Write>(out: &mut W, outcome: &AnswerOutcome) -> io::Result<()> {
    if outcome.correct {
        writeln!(out, "✅ Correct! Well done!")
    } else {
        writeln!(
            out,
            "❌ Incorrect. The correct answer is: {}",
            outcome.correct_answer
        )
    }
}

fn render_results<W: Write>(out: &mut W, results: &QuizResults, language: &str) -> io::Result<()> {
    writeln!(out, "Quiz complete!")?;
    writeln!(
        out,
        "Score: {}/{} ({}%)",
        results.score(),
        results.total(),
        results.percentage()
    )?;
    writeln!(out, "{}", results.tier().message(language))
}
