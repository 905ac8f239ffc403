use clap::Parser;

mod commands;
mod output;
mod tty;

use commands::rewrite;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "headerfix")]
#[command(version = VERSION)]
#[command(about = "Rewrite legacy sortable table headers in the quotes and purchase-orders tables")]
struct Cli {
    #[command(flatten)]
    args: rewrite::RewriteArgs,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let json = cli.args.json;

    tty::status("headerfix is working...");
    let result = rewrite::run(cli.args);

    let exit_code = if json {
        let (json_result, exit_code) = output::map_cmd_result_to_json(result);
        output::print_json_result(json_result);
        exit_code
    } else {
        let (text_result, exit_code) =
            output::map_cmd_result_to_text(result, rewrite::RewriteOutput::to_text);
        output::print_text_result(text_result);
        exit_code
    };

    std::process::ExitCode::from(exit_code.clamp(0, 255) as u8)
}
