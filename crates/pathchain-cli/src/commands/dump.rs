use pathchain_lib::{Colors, ParseOptions};

use super::path_loader::load_path_or_exit;

pub struct DumpArgs {
    pub path: String,
    pub options: ParseOptions,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let parsed = load_path_or_exit(&args.path, &args.options);
    let colors = Colors::new(args.color);
    print!(
        "{}",
        parsed.query.printer().with_terms(true).colored(colors).dump()
    );
}
