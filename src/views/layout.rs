const STYLE: &str = "\
body { font-family: sans-serif; margin: 0; color: #222; } \
nav { background: #6e7bff; padding: 0.6rem 1rem; } \
nav a { color: white; text-decoration: none; margin-right: 1rem; } \
main { max-width: 56rem; margin: 1rem auto; padding: 0 1rem; } \
table { border-collapse: collapse; width: 100%; margin-top: 1rem; } \
th, td { border-bottom: 1px solid #ddd; padding: 0.4rem 0.6rem; text-align: left; } \
form.create { margin: 1rem 0; display: flex; gap: 0.5rem; flex-wrap: wrap; align-items: end; } \
form.inline { display: inline-flex; gap: 0.25rem; margin-right: 0.5rem; } \
label { display: flex; flex-direction: column; font-size: 0.85rem; } \
input { padding: 0.2rem; } \
button { padding: 0.25rem 0.7rem; } \
ul.stats { list-style: none; padding: 0; display: flex; gap: 2rem; } \
ul.stats li { font-size: 1.1rem; } \
p.empty { color: #666; } \
section.panel { margin-bottom: 1.5rem; }";

pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - Health Diary</title>
<style>{style}</style>
</head>
<body>
<nav>
<a href="/">Dashboard</a>
<a href="/water">Water</a>
<a href="/exercise">Exercise</a>
<a href="/sleep">Sleep</a>
<a href="/meal">Meals</a>
<a href="/report">Report</a>
</nav>
<main>
{body}
</main>
</body>
</html>"#,
        title = title,
        style = STYLE,
        body = body,
    )
}
