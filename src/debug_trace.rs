macro_rules! trace {
    ( @chars $action_descr:expr $(, $ch:expr)* ) => {
        // NOTE: expands to the character expression itself, so cursor
        // methods can return it whether tracing is enabled or not.
        {
            #[cfg(feature = "debug_trace")]
            {
                print!(">{}", $action_descr);

                $({
                    print!(": {:?}", $ch.map(char::from));
                })*

                println!();
            }

            $($ch)*
        }
    };

    ( @token $token:expr, $text:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@token: {:?} {:?} `{}`", $token.state, $token.range, $text);
    };

    ( @break $part_idx:expr, $live_state:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@break: part #{} in {:?}", $part_idx, $live_state);
    };

    ( @resume $fragment_idx:expr, $state:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@resume: fragment #{} in {:?}", $fragment_idx, $state);
    };

    ( @fold $raw:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@fold: `{}` is not a tag", $raw);
    };

    ( @cache $event:literal, $literals:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@cache: {} ({} literal(s))", $event, $literals.len());
    };
}
