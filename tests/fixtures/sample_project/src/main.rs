mod util;

fn main() {
	println!("{}", util::greet("world"));
}
