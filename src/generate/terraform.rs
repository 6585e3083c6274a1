//! Infrastructure file template (AWS ECS on Fargate)

use crate::deployment::DeploymentConfig;

/// Region baked into the generated provider block
pub const AWS_REGION: &str = "us-west-2";

pub fn render_terraform(config: &DeploymentConfig) -> String {
    let name = &config.name;
    let port = config.port;
    format!(
        r#"# Basic AWS deployment configuration
terraform {{
  required_providers {{
    aws = {{
      source  = "hashicorp/aws"
      version = "~> 5.0"
    }}
  }}
}}

provider "aws" {{
  region = "{AWS_REGION}"
}}

# Simple ECS cluster
resource "aws_ecs_cluster" "app" {{
  name = "{name}-cluster"
}}

# Container definition
resource "aws_ecs_task_definition" "app" {{
  family                   = "{name}"
  requires_compatibilities = ["FARGATE"]
  network_mode             = "awsvpc"
  cpu                      = 256
  memory                   = 512

  container_definitions = jsonencode([{{
    name  = "{name}"
    image = "{name}:latest"

    portMappings = [{{
      containerPort = {port}
      hostPort      = {port}
    }}]
  }}])
}}

# Output information
output "cluster_name" {{
  description = "ECS cluster name"
  value       = aws_ecs_cluster.app.name
}}
"#
    )
}
