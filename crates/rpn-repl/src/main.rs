//! RPN calculator - interactive command line entry point.

fn main() {
    if let Err(e) = rpn_repl::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
