use serde_derive::Deserialize;
use serde_json::from_reader;
use std::fs::File;
use std::io::BufReader;

macro_rules! read_tests {
    ($path:expr) => {
        glob::glob(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/", $path))
            .unwrap()
            .map(|path| BufReader::new(File::open(path.unwrap()).unwrap()))
    };
}

#[derive(Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedCountMismatch {
    pub expected: usize,
    pub actual: usize,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub enum Expectation {
    Output(String),
    CountMismatch(ExpectedCountMismatch),
    Unsupported(String),
}

#[derive(Deserialize, Debug)]
pub struct TemplateTest {
    pub description: String,
    pub literals: Vec<String>,

    #[serde(default)]
    pub values: Vec<serde_json::Value>,

    pub expected: Expectation,
}

#[derive(Deserialize, Debug)]
pub struct TokenizerTest {
    pub description: String,
    pub literals: Vec<String>,

    /// `[state, text]` pairs, with `["Break", state]` between literals.
    pub tokens: Vec<(String, String)>,
}

#[derive(Deserialize)]
struct Suite<T> {
    #[serde(default = "Vec::new")]
    pub tests: Vec<T>,
}

pub fn get_template_tests() -> Vec<TemplateTest> {
    let mut tests = Vec::new();

    for file in read_tests!("templates/*.json") {
        tests.extend(from_reader::<_, Suite<TemplateTest>>(file).unwrap().tests);
    }

    tests
}

pub fn get_tokenizer_tests() -> Vec<TokenizerTest> {
    let mut tests = Vec::new();

    for file in read_tests!("tokenizer/*.json") {
        tests.extend(from_reader::<_, Suite<TokenizerTest>>(file).unwrap().tests);
    }

    tests
}
