use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use leetgen::api::client::LeetCodeClient;
use leetgen::api::types::QuestionDetail;
use leetgen::config::Config;
use leetgen::editor;
use leetgen::lang::Registry;
use leetgen::lang::extract::read_code;
use leetgen::materialize::Materializer;
use leetgen::question::single_question;

#[derive(Parser)]
#[command(name = "leetgen", about = "Scaffold LeetCode solution files")]
struct Cli {
    /// Language to generate (full name, short name or slug; prefixes work)
    #[arg(short, long, global = true)]
    lang: Option<String>,

    /// Overwrite existing files without asking
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write ~/.leetgen/config.toml
    Init {
        /// Directory where solutions are generated
        #[arg(long)]
        workspace: Option<String>,

        /// Editor command used by `edit`
        #[arg(long)]
        editor: Option<String>,

        /// Name put in the header of generated files
        #[arg(long)]
        author: Option<String>,
    },

    /// Generate solution files for a question (frontend id or title slug)
    Pick {
        qid: String,

        /// Contest the question belongs to
        #[arg(long)]
        contest: Option<String>,
    },

    /// Open a question's solution files in the editor
    Edit { qid: String },

    /// Print the code between the markers of a generated solution
    Code { qid: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?.unwrap_or_default();
    if let Some(lang) = cli.lang {
        config.language = lang;
    }

    match cli.command {
        Commands::Init {
            workspace,
            editor,
            author,
        } => init(config, workspace, editor, author),
        Commands::Pick { qid, contest } => pick(&config, cli.yes, &qid, contest).await,
        Commands::Edit { qid } => edit(&config, &qid).await,
        Commands::Code { qid } => code(&config, &qid).await,
    }
}

fn init(
    mut config: Config,
    workspace: Option<String>,
    editor: Option<String>,
    author: Option<String>,
) -> Result<()> {
    if let Some(workspace) = workspace {
        config.workspace_dir = workspace;
    }
    if let Some(editor) = editor {
        config.editor = editor;
    }
    if let Some(author) = author {
        config.author = author;
    }
    Registry::builtin().require(&config.language)?;

    let path = config.save()?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn materializer(config: &Config, yes: bool) -> Result<Materializer> {
    Ok(Materializer::new(config.expanded_workspace()?)
        .with_author(config.author.clone())
        .with_out_dirs(config.out_dirs())
        .auto_yes(yes))
}

async fn fetch_single(qid: &str) -> Result<QuestionDetail> {
    let client = LeetCodeClient::new()?;
    let questions = client.find_questions(qid).await?;
    Ok(single_question(qid, questions)?)
}

async fn pick(config: &Config, yes: bool, qid: &str, contest: Option<String>) -> Result<()> {
    let registry = Registry::builtin();
    let generator = registry.require(&config.language)?;
    let materializer = materializer(config, yes)?;

    let client = LeetCodeClient::new()?;
    let questions = client.find_questions(qid).await?;
    if questions.is_empty() {
        bail!("No question found for {qid}");
    }

    for mut question in questions {
        question.contest_slug = contest.clone();
        let written = materializer
            .generate(generator, &question)
            .with_context(|| format!("Failed to generate {}", question.title_slug))?;
        if written.is_empty() {
            println!("No files written for {}", question.title_slug);
        }
        for path in written {
            println!("{}", path.display());
        }
    }
    Ok(())
}

async fn edit(config: &Config, qid: &str) -> Result<()> {
    let registry = Registry::builtin();
    let generator = registry.require(&config.language)?;
    let question = fetch_single(qid).await?;

    let files = materializer(config, false)?.generate_paths_only(generator, &question);
    editor::open(&config.editor, &files)
}

async fn code(config: &Config, qid: &str) -> Result<()> {
    let registry = Registry::builtin();
    let generator = registry.require(&config.language)?;
    let question = fetch_single(qid).await?;
    let line_comment = generator.base().line_comment();

    let paths = materializer(config, false)?.generate_paths_only(generator, &question);
    if let Some(code) = read_code(&paths, line_comment)? {
        println!("{code}");
        return Ok(());
    }
    bail!(
        "No generated solution for {} found; run `leetgen pick {qid}` first",
        question.title_slug
    )
}
