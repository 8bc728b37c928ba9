//! create-bison-app entry point.
//! Collects the answers, then hands them to the generation pipeline.

use bison::{
    app::create_app,
    cli::{get_args, Args},
    config::{load_manifest, Settings},
    dev_state::load_variables,
    error::{default_error_handler, Result},
    parser::{get_answers, load_from_stdin, merge_answers, parse_var},
    prompt::{DefaultsPrompter, DialoguerPrompter, Prompter},
    variables::{Answers, GITHUB_REPO_KEY, NAME_KEY},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Answers given up front, lowest precedence first: answers file, stdin,
/// `--var` flags, then the dedicated arguments.
fn preloaded_answers(args: &Args) -> Result<Answers> {
    let mut answers = match &args.answers_file {
        Some(path) => load_variables(path)?,
        None => Answers::new(),
    };

    if args.stdin {
        answers = merge_answers(answers, load_from_stdin()?);
    }

    for var in &args.vars {
        let (key, value) = parse_var(var)?;
        answers.insert(key, value);
    }

    if let Some(name) = &args.name {
        answers.insert(NAME_KEY.to_string(), serde_json::Value::String(name.clone()));
    }
    if let Some(repo) = &args.github_repo {
        answers.insert(GITHUB_REPO_KEY.to_string(), serde_json::Value::String(repo.clone()));
    }

    Ok(answers)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves settings and loads the template manifest, failing before any
///    prompt when the template directory is missing
/// 2. Collects preloaded answers and prompts for the missing ones
/// 3. Runs the pipeline and prints the post-install message
fn run(args: Args) -> Result<()> {
    let mut settings = Settings::new()?;
    if let Some(template) = &args.template {
        settings.template_dir = template.clone();
    }
    settings.dev_mode = args.dev;
    settings.force = args.force;

    let manifest = load_manifest(&settings.template_dir)?;
    let prompt: Box<dyn Prompter> = if args.no_input {
        Box::new(DefaultsPrompter)
    } else {
        Box::new(DialoguerPrompter::new())
    };

    let preloaded = preloaded_answers(&args)?;
    let answers = get_answers(&*prompt, &manifest.questions, preloaded)?;

    let mut stdout = std::io::stdout();
    create_app(&answers, manifest, &settings, &mut stdout)?;
    Ok(())
}
