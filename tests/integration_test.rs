// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(test)]
mod tests {
    use helm_deploy::cli::helm::ChartArgs;
    use helm_deploy::*;
    use std::fs;
    use std::path::Path;

    fn write_service(project_dir: &Path, directory: &str, config: &str) {
        let dir = project_dir.join(directory);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yaml"), config).unwrap();
    }

    fn write_application_file(root: &Path) -> std::path::PathBuf {
        let path = root.join("helm-deploy.toml");
        fs::write(
            &path,
            r#"
project_dir = "services"
target_dir = "charts-out"

[application]
name = "shop"
version = "1.2.0"
description = "Shop application"
services = ["Shop.Api", "Shop.Worker/Shop.Worker.csproj"]
"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_application_file_drives_generation() {
        let root = tempfile::tempdir().unwrap();
        let config_file = write_application_file(root.path());
        let project_dir = root.path().join("services");
        write_service(
            &project_dir,
            "Shop.Api",
            "ports:\n  - name: http\n    port: 8080\nservice:\n  ports:\n    - port: 80\n      targetPort: http\n      ingress:\n        path: /api\n",
        );
        write_service(&project_dir, "Shop.Worker", "replicaCount: 3\n");

        let args = ChartArgs {
            config_file: Some(config_file.display().to_string()),
            ..Default::default()
        };
        let run = args.resolve().unwrap();
        assert_eq!(run.target_dir, root.path().join("charts-out"));
        assert_eq!(run.services.len(), 2);

        let report = run.emitter().emit(&run.services).unwrap();
        assert_eq!(report.application, "shop");
        assert_eq!(report.services[0].service_name, "shop-api");
        assert!(report.services[0].has_ingress());
        assert_eq!(report.services[1].service_name, "shop-worker");
        assert_eq!(report.services[1].replicas, 3);
        assert_eq!(report.services[1].container_ports, 0);

        let out = root.path().join("charts-out");
        assert!(out.join("charts/shop-api/templates/ingress.yaml").is_file());
        assert!(out.join("charts/shop-worker/templates/service.yaml").is_file());
        assert!(!out.join("charts/shop-worker/templates/ingress.yaml").exists());
    }

    #[test]
    fn test_service_without_ports_gets_empty_port_lists() {
        let root = tempfile::tempdir().unwrap();
        let project_dir = root.path().join("services");
        write_service(&project_dir, "Shop.Worker", "# nothing configured yet\n");

        let descriptor = ServiceDescriptor::new(&project_dir, "Shop.Worker").unwrap();
        let application = ApplicationIdentity::new("shop", "1.0.0", "Shop");
        HelmChartEmitter::new(application, root.path().join("helm"))
            .emit(&[descriptor])
            .unwrap();

        let templates = root.path().join("helm/charts/shop-worker/templates");
        let deployment =
            infrastructure::manifest::codec::read_document(&templates.join("deployment.yaml"))
                .unwrap();
        assert_eq!(
            deployment.get_path(&["spec", "replicas"]),
            Some(&serde_yaml::Value::from(1u32))
        );

        let service =
            infrastructure::manifest::codec::read_document(&templates.join("service.yaml"))
                .unwrap();
        let ports = service.get_path(&["spec", "ports"]).unwrap();
        assert_eq!(ports.as_sequence().map(Vec::len), Some(0));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let root = tempfile::tempdir().unwrap();
        let project_dir = root.path().join("services");
        write_service(&project_dir, "Shop.Api", "ports:\n  - port: 8080\n");

        let descriptor = ServiceDescriptor::new(&project_dir, "Shop.Api").unwrap();
        let application = ApplicationIdentity::new("shop", "1.0.0", "Shop");
        let report = HelmChartEmitter::new(application, root.path().join("helm"))
            .plan(&[descriptor])
            .unwrap();

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["application"], "shop");
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["services"][0]["service_name"], "shop-api");
        assert_eq!(json["services"][0]["container_ports"], 1);
    }

    #[test]
    fn test_invalid_application_file_is_reported() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("helm-deploy.toml");
        fs::write(&path, "[application\nname = ").unwrap();

        let err = ApplicationConf::from(&path).unwrap_err();
        assert!(matches!(err, HelmError::TomlParse(_)));
    }
}
