use clap::{Parser, Subcommand};
use opb::{AppError, BuildRequest, CatalogFormat};

#[derive(Parser)]
#[command(name = "opb")]
#[command(version)]
#[command(about = "Assemble paste-ready Korean business email prompts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a prompt from options given as flags
    #[clap(visible_alias = "b")]
    Build {
        /// Email purpose (key or Korean label; see `opb catalog`)
        #[arg(long)]
        purpose: Option<String>,
        /// Audience type
        #[arg(long)]
        audience: Option<String>,
        /// Tone of voice
        #[arg(long)]
        tone: Option<String>,
        /// Target length
        #[arg(long)]
        length: Option<String>,
        /// Subject line style
        #[arg(long)]
        subject_style: Option<String>,
        /// Recipient name
        #[arg(long)]
        recipient_name: Option<String>,
        /// Recipient title or honorific
        #[arg(long)]
        recipient_title: Option<String>,
        /// Desired schedule or deadline, free text
        #[arg(long)]
        deadline: Option<String>,
        /// Requested deliverable or material, free text
        #[arg(long)]
        deliverable: Option<String>,
        /// Situation description fed into the prompt
        #[arg(long)]
        context: Option<String>,
        /// Start with every requirement unchecked
        #[arg(long)]
        no_defaults: bool,
        /// Disable a requirement flag (repeatable)
        #[arg(long, value_name = "KEY")]
        off: Vec<String>,
        /// Append a custom requirement line (repeatable)
        #[arg(long, value_name = "TEXT")]
        require: Vec<String>,
        /// Copy the generated prompt to the system clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Assemble a prompt interactively
    #[clap(visible_alias = "w")]
    Wizard,
    /// List selectable options and the requirement checklist
    #[clap(visible_alias = "c")]
    Catalog {
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Build {
            purpose,
            audience,
            tone,
            length,
            subject_style,
            recipient_name,
            recipient_title,
            deadline,
            deliverable,
            context,
            no_defaults,
            off,
            require,
            copy,
        } => opb::build(&BuildRequest {
            purpose,
            tone,
            length,
            audience,
            subject_style,
            recipient_name,
            recipient_title,
            deadline,
            deliverable,
            context,
            no_defaults,
            off,
            require,
            copy,
        })
        .map(|_| ()),
        Commands::Wizard => opb::wizard().map(|_| ()),
        Commands::Catalog { format } => CatalogFormat::from_input(&format)
            .ok_or_else(|| AppError::UnknownOption {
                field: "format".to_string(),
                value: format.clone(),
                expected: "text, json".to_string(),
            })
            .and_then(|format| opb::catalog(format).map(|_| ())),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
