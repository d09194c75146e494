use clap::Parser;
use classaudit_lib::{run_audit, write_report, AuditConfig};
use log::info;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "classaudit")]
#[command(about = "List every CSS class used in a tree of HTML/PHP documents and where it is styled")]
struct Args {
    /// Directory scanned recursively for markup documents.
    #[arg(env = "CLASSAUDIT_ROOT")]
    root: PathBuf,

    /// Base directory that stylesheet hrefs are resolved against.
    /// Defaults to the parent of ROOT.
    #[arg(long, env = "CLASSAUDIT_PROJECT_ROOT")]
    project_root: Option<PathBuf>,

    /// Markup file extension to scan; repeat for several.
    #[arg(long = "ext", value_name = "EXT", default_values_t = vec!["html".to_string(), "php".to_string()])]
    extensions: Vec<String>,
}

impl Args {
    fn into_config(self) -> AuditConfig {
        let config = match self.project_root {
            Some(project_root) => AuditConfig::new(self.root, project_root),
            None => AuditConfig::for_root(self.root),
        };
        config.with_extensions(self.extensions)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Args::parse().into_config();

    match run_audit(&config) {
        Ok(audit) => {
            let stats = audit.stats;
            info!(
                "Read {} of {} document(s), skipped {}, parsed {} stylesheet(s)",
                stats.documents_read,
                stats.documents_discovered,
                stats.documents_skipped,
                stats.stylesheets_parsed
            );
            let report = audit.class_report();
            if let Err(e) = write_report(&mut io::stdout().lock(), &report) {
                eprintln!("Error writing report: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
