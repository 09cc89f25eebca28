//! Tokenize a small Moss program and print one token per line.

fn main() {
    let src = "\
def fib(n) {
    if n < 2 {
        return n
    }
    return fib(n - 1) + fib(n - 2)
}
";
    match moss_lexer::tokenize(src) {
        Ok(tokens) => {
            for token in tokens {
                println!("{:14} {:?} {:?}", token.location.to_string(), token.tag, token.text);
            }
        }
        Err(e) => eprintln!("lex error: {e}"),
    }
}
