//! Local development compose file template

use crate::deployment::DeploymentConfig;

pub fn render_compose(config: &DeploymentConfig) -> String {
    let name = &config.name;
    let port = config.port;
    format!(
        r#"version: '3.8'

services:
  {name}:
    build: .
    ports:
      - "{port}:{port}"
    environment:
      - NODE_ENV=development
      - FLASK_ENV=development
    volumes:
      - .:/app
    restart: unless-stopped
"#
    )
}
