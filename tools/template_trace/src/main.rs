use getopts::{Matches, Options};
use litmark::*;
use std::env::args;

fn parse_options() -> Option<Matches> {
    let mut opts = Options::new();

    opts.optopt(
        "s",
        "state",
        "Initial tokenizer state, traces a single literal",
        "-s (Content|TagName|BeforeAttributeName|AttributeValueDoubleQuoted|...)",
    );

    opts.optmulti("v", "value", "Value for a placeholder", "-v VALUE");
    opts.optflag("p", "placeholders", "Join the input and split it at `{}` placeholders");
    opts.optflag("L", "lenient", "Treat missing values as null");
    opts.optflag("h", "help", "Show this help");

    let matches = match opts.parse(args().skip(1)) {
        Ok(matches) => {
            if matches.free.is_empty() {
                eprintln!("Missing template literals");
                None
            } else if matches.opt_present("h") {
                None
            } else {
                Some(matches)
            }
        }
        Err(e) => {
            eprintln!("{e}");
            None
        }
    };

    if matches.is_none() {
        eprintln!(
            "{}",
            opts.usage("Usage: cargo run -- [options] LITERAL...")
        );
    }

    matches
}

fn trace_single_literal(literal: &str, state: TokenizerState) {
    let mut tokenizer = HtmlTokenizer::new("");

    tokenizer.set_source(literal, state);

    loop {
        let token = tokenizer.next();

        println!("{:?} {:?}", token.state, tokenizer.value(token.range));

        if token.state == TokenizerState::End {
            break;
        }
    }
}

fn trace_template(literals: &[String], values: Vec<Value<'_>>, strict: bool) {
    tokenize_literals(literals, |event| match event {
        LexEvent::Token { literal, state, text } => println!("[{literal}] {state:?} {text:?}"),
        LexEvent::Break {
            literal,
            live_state,
        } => println!("[{literal}] --- break in {live_state:?} ---"),
    });

    let cache = TemplateCache::new(Settings {
        strict,
        ..Settings::default()
    });

    let compiler = match cache.html(literals, values) {
        Ok(compiler) => compiler,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    for (idx, part) in compiler.template().parts().iter().enumerate() {
        println!("Part #{idx} ({} break(s)): {part:#?}", part.breaks());
    }

    match compiler.compile() {
        Ok(output) => println!("Output: {output}"),
        Err(e) => eprintln!("{e}"),
    }
}

fn main() {
    let matches = match parse_options() {
        Some(m) => m,
        None => return,
    };

    if let Some(state) = matches.opt_str("s") {
        for literal in &matches.free {
            trace_single_literal(literal, TokenizerState::from(state.as_str()));
        }

        return;
    }

    let literals = if matches.opt_present("p") {
        split_placeholders(&matches.free.join(""))
    } else {
        matches.free.clone()
    };

    let values = matches
        .opt_strs("v")
        .into_iter()
        .map(Value::from)
        .collect();

    trace_template(&literals, values, !matches.opt_present("L"));
}
