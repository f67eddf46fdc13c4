mod cli;

use cli::Args;
use nuget_depgraph::adapters::outbound::console::StderrProgressReporter;
use nuget_depgraph::application::dto::GraphRequest;
use nuget_depgraph::application::factories::{
    FormatterFactory, FormatterType, PresenterFactory, PresenterType, SourceFactory,
};
use nuget_depgraph::application::use_cases::BuildGraphUseCase;
use nuget_depgraph::config::load_config_from_path;
use nuget_depgraph::ports::outbound::ProgressReporter;
use nuget_depgraph::shared::error::ExitCode;
use nuget_depgraph::shared::Result;
use owo_colors::OwoColorize;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments (clap exits with code 2 on usage errors)
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("\n{} An error occurred:\n", "❌".red());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\n{} {}", "Caused by:".yellow(), err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,nuget_depgraph=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    // Configuration is loaded once and passed explicitly from here on
    let config = load_config_from_path(&args.config, &args.overrides())?;

    let stdout = PresenterFactory::create(PresenterType::Stdout);
    stdout.present(&config.summary())?;

    // Select the dependency source (the only branch on test_mode)
    let progress_reporter = StderrProgressReporter::new();
    progress_reporter.report(&SourceFactory::progress_message(&config));
    let source = SourceFactory::create(&config)?;

    let use_case = BuildGraphUseCase::new(source, progress_reporter);
    let response = use_case.execute(GraphRequest::from_config(&config))?;

    let listing = FormatterFactory::create(FormatterType::Listing)
        .format(&response.graph, &response.root)?;
    stdout.present(&format!("\n{}", listing))?;

    if config.ascii_tree() {
        eprintln!("{}", FormatterFactory::progress_message(FormatterType::AsciiTree));
        let tree = FormatterFactory::create(FormatterType::AsciiTree)
            .format(&response.graph, &response.root)?;
        stdout.present(&format!("\n{}", tree))?;
    } else {
        eprintln!("{}", FormatterFactory::progress_message(FormatterType::Dot));
        let dot = FormatterFactory::create(FormatterType::Dot)
            .format(&response.graph, &response.root)?;
        let graph_path = PresenterFactory::graph_file_path(config.output_file());
        if graph_path != config.output_file() {
            eprintln!(
                "💡 Writing Graphviz source; render it with: dot -Tpng {} -o {}",
                graph_path.display(),
                config.output_file().display()
            );
        }
        PresenterFactory::create(PresenterType::File(graph_path)).present(&dot)?;
    }

    Ok(())
}
