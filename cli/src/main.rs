//! Demonstration binary driving [`ssti_engine`] against an in-process
//! fixture oracle (a denylist of substrings), the way the teacher stack
//! ships a small demonstration binary (`test_origin`) alongside its real
//! proxy library. This CLI talks to no live target: form discovery,
//! field-fuzzing, and the real HTTP oracle are out of scope (spec §1).

use std::env;
use std::fs;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing::info;

use ssti_engine::{EngineConfig, Goal, Oracle, PayloadEngine};

/// A denylist-backed fixture oracle: rejects any fragment containing one
/// of its blocked substrings, accepts everything else.
struct DenylistOracle {
    blocked: Vec<String>,
}

impl Oracle for DenylistOracle {
    fn check(&self, fragment: &str) -> bool {
        !self.blocked.iter().any(|b| fragment.contains(b.as_str()))
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ssti_cli=info".into()),
        )
        .with_target(false)
        .init();
}

fn usage() -> &'static str {
    "usage: ssti-cli [--denylist <file>] <gen-type> <args...>\n\n\
     gen-types:\n  \
       unsigned-int <n>\n  \
       int <n>\n  \
       string <s>\n  \
       os-popen-read <cmd>\n  \
       module-os-popen-read <cmd>\n  \
       config\n  \
       eval <expr>\n\n\
     --denylist <file>   newline-separated substrings the fixture oracle rejects\n\
                         (default: a small built-in denylist blocking '__import__', 'os.system')"
}

fn parse_goal(gen_type: &str, rest: &[String]) -> Result<Goal> {
    let arg = |i: usize| -> Result<&String> {
        rest.get(i)
            .with_context(|| format!("'{gen_type}' requires an argument"))
    };

    Ok(match gen_type {
        "unsigned-int" => Goal::UnsignedInt(arg(0)?.parse().context("not a valid u64")?),
        "int" => Goal::Int(arg(0)?.parse().context("not a valid i64")?),
        "string" => Goal::Str(arg(0)?.clone()),
        "os-popen-read" => Goal::OsPopenRead(arg(0)?.clone()),
        "module-os-popen-read" => Goal::ModuleOsPopenRead(arg(0)?.clone()),
        "config" => Goal::Config,
        "eval" => Goal::Eval(arg(0)?.clone()),
        other => bail!("unknown generation type '{other}'\n\n{}", usage()),
    })
}

fn default_denylist() -> Vec<String> {
    vec!["__import__".to_string(), "os.system".to_string()]
}

fn load_denylist(path: &str) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading denylist file {path}"))?;
    Ok(text.lines().map(str::to_string).filter(|l| !l.is_empty()).collect())
}

fn run() -> Result<()> {
    init_logging();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let blocked = if args.first().map(String::as_str) == Some("--denylist") {
        if args.len() < 2 {
            bail!("--denylist requires a file path\n\n{}", usage());
        }
        let path = args.remove(1);
        args.remove(0);
        load_denylist(&path)?
    } else {
        default_denylist()
    };

    if args.is_empty() {
        bail!("{}", usage());
    }

    let gen_type = args.remove(0);
    let goal = parse_goal(&gen_type, &args)?;

    info!(blocked_count = blocked.len(), "fixture oracle ready");
    let oracle = DenylistOracle { blocked };
    let engine = PayloadEngine::with_config(oracle, EngineConfig::default());

    match engine.full_generate(goal) {
        Some((payload, will_echo)) => {
            println!("{payload}");
            if !will_echo {
                eprintln!("note: chosen outer wrapper does not echo its result");
            }
            Ok(())
        }
        None => bail!("generation failed: no candidate fragment survived the fixture oracle"),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
