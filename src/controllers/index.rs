use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>OAuth2 Relay</title>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <style>
    body {
      font-family: system-ui, -apple-system, sans-serif;
      max-width: 640px;
      margin: 2rem auto;
      background: #f5f5f5;
    }
    form {
      padding: 1.5rem;
      margin-bottom: 1.5rem;
      background: white;
      border-radius: 12px;
      box-shadow: 0 2px 8px rgba(0,0,0,0.1);
    }
    label {
      display: block;
      margin-top: 0.75rem;
      color: #333;
    }
    input[type=text] {
      width: 100%;
      padding: 0.4rem;
    }
    button {
      margin-top: 1rem;
    }
  </style>
</head>
<body>
  <form action="/oauth" method="get">
    <h1>Authorization code</h1>
    <label>Domain <input type="text" name="domain"></label>
    <label>Client id <input type="text" name="clientId"></label>
    <label>Scopes <input type="text" name="scopes"></label>
    <label><input type="checkbox" name="currentCompany"> Current company</label>
    <button type="submit">Authorize</button>
  </form>

  <form action="/local" method="post">
    <h1>Local session token</h1>
    <label>Subject <input type="text" name="sub"></label>
    <label>Enterprise id <input type="text" name="id_entreprise"></label>
    <label>RCA partner id <input type="text" name="rcaPartnerId"></label>
    <button type="submit">Generate</button>
  </form>
</body>
</html>"#;

/// GET /index - Static start page
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}
