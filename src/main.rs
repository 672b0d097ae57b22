use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use zedit::kernel::services::adapters::{ConfigService, LocalFileProvider};
use zedit::kernel::TextEditorCore;

mod logging;

fn main() -> ExitCode {
    let logging = logging::init();
    if let Some(guard) = &logging {
        tracing::debug!(log_dir = %guard.log_dir().display(), "session start");
    }

    let mut args = env::args().skip(1);
    let Some(path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: zedit <file> [query]");
        return ExitCode::from(2);
    };
    let query = args.next();

    let config = ConfigService::load().into_editor();
    let mut editor = TextEditorCore::with_config(config);

    if let Err(e) = editor.open(&LocalFileProvider, &path) {
        eprintln!("zedit: {}", e);
        return ExitCode::FAILURE;
    }

    println!("{}", path.display());
    println!("bytes: {}", editor.len());
    println!("lines: {}", editor.line_count());

    if let Some(query) = query {
        editor.search_open();
        editor.search_set_query(&query);
        let search = editor.search();
        println!("matches: {}", search.match_count());
        for &offset in search.matches() {
            let (line, col) = editor.line_col(offset);
            println!("  {} ({}:{})", offset, line + 1, col + 1);
        }
    }

    ExitCode::SUCCESS
}
