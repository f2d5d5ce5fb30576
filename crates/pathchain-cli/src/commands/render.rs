use pathchain_lib::ParseOptions;

use super::path_loader::load_path_or_exit;

pub struct RenderArgs {
    pub path: String,
    pub options: ParseOptions,
}

pub fn run(args: RenderArgs) {
    let parsed = load_path_or_exit(&args.path, &args.options);
    println!("{}", parsed.query);
}
