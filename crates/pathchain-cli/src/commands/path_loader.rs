use std::io::{self, Read};

use pathchain_lib::{ParseError, ParseOptions, Parsed, parse_with};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Read the expression (`-` means stdin) and parse it.
pub fn load_path(path: &str, options: &ParseOptions) -> Result<Parsed, LoadError> {
    let text = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        path.to_owned()
    };

    let parsed = parse_with(text.trim(), options)?;
    for dropped in &parsed.dropped {
        tracing::debug!(
            offset = dropped.offset,
            rejection = ?dropped.rejection,
            "step dropped"
        );
    }
    Ok(parsed)
}

/// Load or exit with `error: ...` on stderr.
pub fn load_path_or_exit(path: &str, options: &ParseOptions) -> Parsed {
    match load_path(path, options) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
