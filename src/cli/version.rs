/// Display version information
pub fn execute() {
    println!("gift-exchange {}", env!("CARGO_PKG_VERSION"));
    println!("Draw a gift exchange where nobody gives to their own partner");
}
