//! Main entry point for the lakegrant CLI app

use std::sync::Arc;

use lakegrant::acl::Identity;
use lakegrant::cli;
use lakegrant::orchestrate::{self, SessionContext};
use lakegrant::provider::local::{LocalFsProvider, SetfaclSetter};
use lakegrant::provider::memory::RecordingSetter;
use lakegrant::provider::AclSetter;

fn main() -> std::process::ExitCode {
    if let Err(e) = run_app() {
        if e.downcast_ref::<clap::Error>().is_none() {
            eprintln!("Error: {}", e);
        }
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::run()?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let identity = Identity::new(args.identity, args.kind.into());
    let session = SessionContext::new(args.account.clone());
    let provider = Arc::new(LocalFsProvider::new(&args.mount));

    if args.dry_run {
        let setter = Arc::new(RecordingSetter::new());
        execute(&args, provider, Arc::clone(&setter), session, identity)?;
        for (path, spec) in setter.applied() {
            println!("[dry-run] {} <- {}", path, spec);
        }
    } else {
        let setter = Arc::new(SetfaclSetter::new(&args.mount));
        execute(&args, provider, setter, session, identity)?;
    }

    Ok(())
}

fn execute<S>(
    args: &cli::Args,
    provider: Arc<LocalFsProvider>,
    setter: Arc<S>,
    session: SessionContext,
    identity: Identity,
) -> Result<(), Box<dyn std::error::Error>>
where
    S: AclSetter + 'static,
{
    if args.full_replication {
        let stats = orchestrate::replicate_all(provider.as_ref(), setter.as_ref(), &session, identity)?;
        println!(
            "Granted {} full access to {} directories and {} files in account '{}'.",
            args.identity, stats.directories, stats.files, args.account
        );
        return Ok(());
    }

    let outcome = orchestrate::grant(provider, setter, session, identity, chrono::Utc::now())?;
    println!(
        "Granted {} access to the job-service paths of account '{}'.",
        args.identity, args.account
    );
    println!(
        "Background propagation task {} is running; do not close this session until it completes.",
        outcome.propagation.id()
    );

    // The process is the session: leaving main would orphan the walker, so
    // block here after reporting the handle.
    for handle in outcome.path_tasks {
        handle.wait()?;
    }
    outcome.propagation.wait()?;
    println!("Propagation complete.");
    Ok(())
}
