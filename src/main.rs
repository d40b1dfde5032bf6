fn main() {
    if let Err(err) = edgeclip::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
