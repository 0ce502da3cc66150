use criterion::Bencher;
use litmark::{Template, TemplateCache, Value};
use std::hint::black_box;

fn values_for(template: &Template) -> Vec<Value<'static>> {
    (0..template.value_count())
        .map(|i| Value::from(format!("value <{i}> & \"more\"")))
        .collect()
}

fn compile_runner(b: &mut Bencher<'_>, literals: &Vec<String>) {
    let template = Template::new(literals);
    let values = values_for(&template);

    b.iter(|| black_box(template.compile(&values).unwrap()))
}

fn cached_runner(b: &mut Bencher<'_>, literals: &Vec<String>) {
    let cache = TemplateCache::default();
    let value_count = cache.get_or_parse(literals).value_count();

    b.iter(|| {
        let values = (0..value_count).map(Value::from).collect();
        let compiler = cache.html(literals, values).unwrap();

        black_box(compiler.to_string())
    })
}

define_group!(
    "Compiling",
    [
        ("Compile parsed template", compile_runner),
        ("Cache lookup and compile", cached_runner)
    ]
);
