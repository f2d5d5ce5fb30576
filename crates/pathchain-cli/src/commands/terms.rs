use pathchain_lib::{ParseOptions, PathQuery, Term};

use super::path_loader::load_path_or_exit;

pub struct TermsArgs {
    pub path: String,
    pub options: ParseOptions,
    pub json: bool,
    pub root: bool,
}

pub fn run(args: TermsArgs) {
    let parsed = load_path_or_exit(&args.path, &args.options);
    match format_terms(&parsed.query, args.root, args.json) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Terms one per line as `field:text`, or a pretty JSON array.
pub fn format_terms(query: &PathQuery, root: bool, json: bool) -> serde_json::Result<String> {
    let mut terms: Vec<Term> = Vec::with_capacity(query.step_count() + 1);
    if root {
        terms.push(query.root_term());
    }
    terms.extend(query.terms());

    if json {
        let mut out = serde_json::to_string_pretty(&terms)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for term in &terms {
        out.push_str(&term.to_string());
        out.push('\n');
    }
    Ok(out)
}
