//! The compiler driver: reads a source file, runs it through the lex →
//! parse → analyse pipeline, and reports the outcome.
//!
//! AtomC compiles a single translation unit in one fail-fast pass: the
//! first fatal diagnostic aborts the run, there is no recovery and no
//! aggregation of multiple errors (unlike a driver fronting a codegen
//! pipeline, which would keep compiling past an error in one file to
//! report as many as it can across a whole crate).

use std::fmt;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use atomc_sem::{show_domain, DomainStack};
use atomc_util::CompileError;

/// What a single invocation of the driver is asked to do.
#[derive(Debug, Clone)]
pub struct Config {
    /// The AtomC source file to compile.
    pub input_file: PathBuf,
    /// When set, print the symbol table of this domain after a successful
    /// compile instead of (or in addition to) the success banner.
    pub dump_domain: Option<DomainSelector>,
}

/// Which domain's symbols `--dump-domain` should print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainSelector {
    Global,
}

pub const SUCCESS_MESSAGE: &str = "Input is syntactically and semantically correct";

/// A completed, successful compilation: the populated domain stack, kept
/// around only so the driver can honor `--dump-domain` after the fact.
pub struct CompilationResult {
    pub domains: DomainStack,
}

impl fmt::Debug for CompilationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompilationResult").finish_non_exhaustive()
    }
}

/// Read `config.input_file`, lex, parse, and analyse it.
///
/// Returns `Ok` with the resulting domain stack on success, or the single
/// fatal [`CompileError`] the pipeline stopped at. I/O failures (the file
/// doesn't exist, isn't readable, isn't valid UTF-8) are reported via
/// `anyhow` rather than `CompileError`, since they're not a property of the
/// source text the lexer/parser ever see.
pub fn compile(config: &Config) -> Result<std::result::Result<CompilationResult, CompileError>> {
    let source = fs::read_to_string(&config.input_file).with_context(|| {
        format!("could not read source file {}", config.input_file.display())
    })?;

    Ok(run_pipeline(&source))
}

fn run_pipeline(source: &str) -> std::result::Result<CompilationResult, CompileError> {
    let (tokens, interner) = atomc_lex::Lexer::new(source).tokenize()?;
    let domains = atomc_par::parse(tokens, &interner)?;
    Ok(CompilationResult { domains })
}

/// Render the result of a compilation the way the CLI reports it: the
/// success banner (plus an optional symbol dump) or the single fatal
/// diagnostic, formatted exactly as `error in line <N>: <message>` by
/// `CompileError`'s own `Display` impl.
pub fn report(
    outcome: &std::result::Result<CompilationResult, CompileError>,
    dump_domain: Option<DomainSelector>,
) -> String {
    match outcome {
        Ok(result) => {
            let mut out = String::from(SUCCESS_MESSAGE);
            if let Some(DomainSelector::Global) = dump_domain {
                out.push('\n');
                out.push_str(&show_domain(
                    &result.domains,
                    result.domains.global(),
                    "global",
                ));
            }
            out
        }
        Err(err) => err.to_string(),
    }
}
