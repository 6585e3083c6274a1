//! Container build file templates

use crate::deployment::{DeploymentConfig, RuntimeType};

pub fn render_dockerfile(config: &DeploymentConfig) -> String {
    let port = config.port;
    match config.runtime_type {
        RuntimeType::Flask => format!(
            r#"FROM python:3.9
WORKDIR /app
COPY requirements.txt .
RUN pip install -r requirements.txt
COPY . .
EXPOSE {port}
CMD ["python", "app.py"]"#
        ),
        RuntimeType::Django => format!(
            r#"FROM python:3.9
WORKDIR /app
COPY requirements.txt .
RUN pip install -r requirements.txt
COPY . .
RUN python manage.py collectstatic --noinput
EXPOSE {port}
CMD ["python", "manage.py", "runserver", "0.0.0.0:{port}"]"#
        ),
        RuntimeType::NodeJs => format!(
            r#"FROM node:16
WORKDIR /app
COPY package*.json ./
RUN npm install
COPY . .
EXPOSE {port}
CMD ["npm", "start"]"#
        ),
        RuntimeType::Python => format!(
            r#"FROM python:3.9
WORKDIR /app
COPY . .
EXPOSE {port}
CMD ["python", "app.py"]"#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(runtime: RuntimeType, port: u16) -> String {
        render_dockerfile(
            &DeploymentConfig::new("svc")
                .with_runtime(runtime)
                .with_port(port),
        )
    }

    #[test]
    fn test_flask_installs_requirements() {
        let dockerfile = render(RuntimeType::Flask, 5000);
        assert!(dockerfile.starts_with("FROM python:3.9\n"));
        assert!(dockerfile.contains("RUN pip install -r requirements.txt"));
        assert!(dockerfile.contains("EXPOSE 5000"));
    }

    #[test]
    fn test_django_embeds_port_in_start_command() {
        let dockerfile = render(RuntimeType::Django, 8000);
        assert!(dockerfile.contains("collectstatic --noinput"));
        assert!(dockerfile.contains("EXPOSE 8000"));
        assert!(dockerfile.contains(r#""runserver", "0.0.0.0:8000"]"#));
    }

    #[test]
    fn test_nodejs_uses_npm() {
        let dockerfile = render(RuntimeType::NodeJs, 3000);
        assert!(dockerfile.starts_with("FROM node:16\n"));
        assert!(dockerfile.contains("COPY package*.json ./"));
        assert!(dockerfile.contains("EXPOSE 3000"));
        assert!(dockerfile.ends_with(r#"CMD ["npm", "start"]"#));
    }

    #[test]
    fn test_generic_python_skips_requirements() {
        let dockerfile = render(RuntimeType::Python, 5000);
        assert!(!dockerfile.contains("requirements.txt"));
        assert!(dockerfile.contains("EXPOSE 5000"));
    }
}
