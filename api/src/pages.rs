//! Server-rendered HTML pages. All interpolated text goes through [`escape`].

use std::fmt::Write;

use chrono::{Datelike, Utc};

use models::domains::{candidates, competitions};
use models::schemas::competition::CompetitionSchema;

pub const WRONG_PASSWORD: &str = "Contraseña incorrecta";

/// Which of the two login forms to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginForm {
    Site,
    Dashboard,
}

impl LoginForm {
    fn action(self) -> &'static str {
        match self {
            Self::Site => "/login/auth",
            Self::Dashboard => "/dashboard/auth",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Site => "Acceso",
            Self::Dashboard => "Panel de administración",
        }
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
.error {{ color: #b00020; }}
.candidate {{ display: block; padding: .4rem 0; }}
table {{ border-collapse: collapse; width: 100%; }}
td, th {{ border-bottom: 1px solid #ddd; padding: .3rem; text-align: left; }}
footer {{ margin-top: 3rem; color: #777; font-size: .85rem; }}
</style>
</head>
<body>
{body}
<footer>&copy; {year}</footer>
</body>
</html>"#,
        title = escape(title),
        body = body,
        year = Utc::now().year(),
    )
}

pub fn login(form: LoginForm, error: Option<&str>) -> String {
    let error = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape(e)))
        .unwrap_or_default();
    let body = format!(
        r#"<h1>{title}</h1>
{error}
<form method="post" action="{action}">
<label>Contraseña <input type="password" name="password" required autofocus></label>
<button type="submit">Entrar</button>
</form>"#,
        title = form.title(),
        action = form.action(),
    );
    layout(form.title(), &body)
}

pub fn index(competitions: &[competitions::Model]) -> String {
    let mut items = String::new();
    for competition in competitions {
        let _ = writeln!(
            items,
            r#"<li><a href="/vote/{slug}">{name}</a></li>"#,
            slug = escape(&competition.slug),
            name = escape(&competition.name),
        );
    }
    let body = format!(
        r#"<h1>Votaciones</h1>
<ul>
{items}</ul>
<p><a href="/dashboard/main">Panel de administración</a></p>"#
    );
    layout("Votaciones", &body)
}

pub fn vote(
    competition: &competitions::Model,
    candidates: &[candidates::Model],
    has_voted: bool,
) -> String {
    let name = escape(&competition.name);
    if has_voted {
        let body = format!(
            r#"<h1>{name}</h1>
<p>¡Gracias por votar! Ya has participado en esta competencia.</p>"#
        );
        return layout(&competition.name, &body);
    }

    let mut options = String::new();
    for candidate in candidates {
        let _ = writeln!(
            options,
            r#"<label class="candidate"><input type="checkbox" name="candidate" value="{id}"> {name}</label>"#,
            id = candidate.id,
            name = escape(&candidate.name),
        );
    }

    let body = format!(
        r#"<h1>{name}</h1>
<p>Selecciona exactamente 3 candidatos.</p>
<form id="ballot">
{options}<button type="submit">Votar</button>
</form>
<p id="result"></p>
<script>
document.getElementById("ballot").addEventListener("submit", async (event) => {{
  event.preventDefault();
  const ids = [...document.querySelectorAll('input[name="candidate"]:checked')].map((el) => Number(el.value));
  const result = document.getElementById("result");
  if (ids.length !== 3) {{
    result.textContent = "Debes seleccionar exactamente 3 candidatos";
    return;
  }}
  const response = await fetch("/api/vote/{slug}", {{
    method: "POST",
    headers: {{ "Content-Type": "application/json" }},
    body: JSON.stringify({{ candidate_ids: ids }}),
  }});
  const data = await response.json();
  if (response.ok) {{
    document.getElementById("ballot").remove();
    result.textContent = data.message;
  }} else {{
    result.textContent = data.error;
  }}
}});
</script>"#,
        slug = escape(&competition.slug),
    );
    layout(&competition.name, &body)
}

pub fn dashboard(competitions: &[CompetitionSchema]) -> String {
    let mut sections = String::new();
    for competition in competitions {
        let mut rows = String::new();
        for candidate in &competition.candidates {
            let _ = writeln!(
                rows,
                r#"<tr><td>{name}</td><td>{votes}</td><td><button onclick="deleteCandidate({id})">Eliminar</button></td></tr>"#,
                id = candidate.id,
                name = escape(&candidate.name),
                votes = candidate.votes,
            );
        }
        let _ = writeln!(
            sections,
            r#"<section>
<h2>{name} <small>(/vote/{slug})</small></h2>
<p>Votos totales: <span id="total-{id}">{total}</span></p>
<label><input type="checkbox" {checked} onchange="toggleRandomize({id}, this)"> Orden aleatorio</label>
<table id="stats-{id}">
<tr><th>Candidato</th><th>Votos</th><th></th></tr>
{rows}</table>
<form onsubmit="addCandidate(event, {id})">
<input name="name" placeholder="Nuevo candidato" required>
<button type="submit">Añadir</button>
</form>
<button onclick="refreshStats({id})">Actualizar resultados</button>
<button onclick="resetVotes({id})">Reiniciar votos</button>
</section>"#,
            id = competition.id,
            name = escape(&competition.name),
            slug = escape(&competition.slug),
            total = competition.total_votes(),
            checked = if competition.randomize_candidates {
                "checked"
            } else {
                ""
            },
        );
    }

    let body = format!(
        r#"<h1>Panel de administración</h1>
<p><a href="/dashboard/logout">Cerrar sesión</a></p>
{sections}
<script>
async function call(method, url, body) {{
  const response = await fetch(url, {{
    method,
    headers: {{ "Content-Type": "application/json" }},
    body: body === undefined ? undefined : JSON.stringify(body),
  }});
  const data = await response.json();
  if (!response.ok) {{
    alert(data.error);
    throw new Error(data.error);
  }}
  return data;
}}
async function addCandidate(event, competitionId) {{
  event.preventDefault();
  const name = event.target.elements.name.value;
  await call("POST", "/api/dashboard/candidate", {{ name, competition_id: competitionId }});
  location.reload();
}}
async function deleteCandidate(id) {{
  if (!confirm("¿Eliminar candidato y sus votos?")) return;
  await call("DELETE", "/api/dashboard/candidate/" + id);
  location.reload();
}}
async function toggleRandomize(id, checkbox) {{
  const data = await call("POST", "/api/dashboard/competition/" + id + "/randomize");
  checkbox.checked = data.randomize;
}}
async function resetVotes(id) {{
  if (!confirm("¿Eliminar todos los votos? Esta acción no se puede deshacer.")) return;
  await call("POST", "/api/dashboard/competition/" + id + "/reset-votes");
  location.reload();
}}
async function refreshStats(id) {{
  const data = await call("GET", "/api/dashboard/stats/" + id);
  const table = document.getElementById("stats-" + id);
  table.querySelectorAll("tr:not(:first-child)").forEach((row) => row.remove());
  for (const candidate of data.candidates) {{
    const row = table.insertRow();
    row.insertCell().textContent = candidate.name;
    row.insertCell().textContent = candidate.votes;
  }}
  document.getElementById("total-" + id).textContent = data.total_votes;
}}
</script>"#
    );
    layout("Panel de administración", &body)
}

pub fn not_found() -> String {
    layout(
        "No encontrado",
        r#"<h1>404</h1>
<p>La página solicitada no existe.</p>"#,
    )
}
