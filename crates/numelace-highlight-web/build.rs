//! Records the git commit of the highlighter build.
//!
//! `version::build_version` reads `VERGEN_GIT_SHA` so the startup log of the
//! loaded wasm module names the commit the page is running.

use vergen_gitcl::{Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let gitcl = GitclBuilder::all_git()?;
    Emitter::default().add_instructions(&gitcl)?.emit()?;
    Ok(())
}
