//! # Built-in Service Registry
//!
//! The static table of services `bootup` knows how to install.
//!
//! Table order is the catalog's native order: within a category, the browser
//! and `bootup list` show services in the order they appear in [`SERVICES`].
//! Category display order comes from [`CATEGORY_ORDER`]; a service whose
//! category is missing from that list is not shown.

use super::probe::Probe;
use super::recipe::{Recipe, Step};
use super::{Catalog, CatalogError, Installer, ServiceInfo};

/// Preferred display order for categories.
pub const CATEGORY_ORDER: &[&str] = &[
    "Web Servers",
    "Databases",
    "Storage",
    "Development",
    "Message Brokers",
    "Monitoring",
];

/// One registry row.
#[derive(Debug)]
pub struct ServiceDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub probe: Probe,
    pub recipe: Recipe,
}

impl ServiceDef {
    fn info(&self) -> ServiceInfo {
        ServiceInfo::new(self.id, self.name, self.description, self.category)
    }
}

const APT_UPDATE: Step = Step::run("update package list", "sudo", &["apt-get", "update", "-y"]);
const DAEMON_RELOAD: Step = Step::run("reload systemd", "sudo", &["systemctl", "daemon-reload"]);

pub static SERVICES: &[ServiceDef] = &[
    // -- Web Servers --
    ServiceDef {
        id: "nginx",
        name: "Nginx",
        description: "High-performance web server",
        category: "Web Servers",
        probe: Probe::Command("nginx"),
        recipe: Recipe {
            steps: &[
                APT_UPDATE,
                Step::run(
                    "install Nginx",
                    "sudo",
                    &["apt-get", "install", "-y", "nginx", "apache2-utils"],
                ),
            ],
            notes: &["Default site root: /var/www/html"],
        },
    },
    ServiceDef {
        id: "caddy",
        name: "Caddy",
        description: "Modern web server with automatic HTTPS",
        category: "Web Servers",
        probe: Probe::Command("caddy"),
        recipe: Recipe {
            steps: &[
                Step::run(
                    "install required packages",
                    "sudo",
                    &[
                        "apt-get",
                        "install",
                        "-y",
                        "debian-keyring",
                        "debian-archive-keyring",
                        "apt-transport-https",
                        "curl",
                    ],
                ),
                Step::shell(
                    "add Caddy GPG key",
                    "curl -1sLf 'https://dl.cloudsmith.io/public/caddy/stable/gpg.key' | sudo gpg --dearmor --yes -o /usr/share/keyrings/caddy-stable-archive-keyring.gpg",
                ),
                Step::shell(
                    "add Caddy repository",
                    "curl -1sLf 'https://dl.cloudsmith.io/public/caddy/stable/debian.deb.txt' | sudo tee /etc/apt/sources.list.d/caddy-stable.list > /dev/null",
                ),
                APT_UPDATE,
                Step::run("install Caddy", "sudo", &["apt-get", "install", "-y", "caddy"]),
            ],
            notes: &[
                "Start it with: sudo systemctl start caddy",
                "Default configuration file: /etc/caddy/Caddyfile",
            ],
        },
    },
    // -- Databases --
    ServiceDef {
        id: "postgresql",
        name: "PostgreSQL",
        description: "Powerful relational database",
        category: "Databases",
        probe: Probe::Command("psql"),
        recipe: Recipe {
            steps: &[
                Step::run(
                    "install PostgreSQL",
                    "sudo",
                    &["apt-get", "install", "-y", "postgresql", "postgresql-contrib"],
                ),
                Step::run("enable PostgreSQL service", "sudo", &["systemctl", "enable", "postgresql"]),
                Step::run("start PostgreSQL service", "sudo", &["systemctl", "start", "postgresql"]),
            ],
            notes: &[],
        },
    },
    ServiceDef {
        id: "mysql",
        name: "MySQL",
        description: "Popular open-source relational database",
        category: "Databases",
        probe: Probe::Command("mysqld"),
        recipe: Recipe {
            steps: &[
                APT_UPDATE,
                Step::run("install MySQL server", "sudo", &["apt-get", "install", "-y", "mysql-server"]),
                Step::run("enable MySQL service", "sudo", &["systemctl", "enable", "mysql"]),
                Step::run("start MySQL service", "sudo", &["systemctl", "start", "mysql"]),
            ],
            notes: &[
                "Run 'sudo mysql_secure_installation' to finish securing the server",
                "Default connection: mysql -u root -p",
            ],
        },
    },
    ServiceDef {
        id: "mongodb",
        name: "MongoDB",
        description: "NoSQL document database",
        category: "Databases",
        probe: Probe::Command("mongod"),
        recipe: Recipe {
            steps: &[
                Step::shell(
                    "add MongoDB GPG key",
                    "curl -fsSL https://www.mongodb.org/static/pgp/server-8.0.asc | sudo gpg --yes -o /usr/share/keyrings/mongodb-server-8.0.gpg --dearmor",
                ),
                Step::shell(
                    "add MongoDB repository",
                    "echo \"deb [ arch=amd64,arm64 signed-by=/usr/share/keyrings/mongodb-server-8.0.gpg ] https://repo.mongodb.org/apt/ubuntu noble/mongodb-org/8.2 multiverse\" | sudo tee /etc/apt/sources.list.d/mongodb-org-8.2.list > /dev/null",
                ),
                APT_UPDATE,
                Step::run("install MongoDB", "sudo", &["apt-get", "install", "-y", "mongodb-org"]),
                Step::run("enable MongoDB service", "sudo", &["systemctl", "enable", "mongod"]),
                Step::run("start MongoDB service", "sudo", &["systemctl", "start", "mongod"]),
            ],
            notes: &[],
        },
    },
    ServiceDef {
        id: "redis",
        name: "Redis",
        description: "In-memory data structure store",
        category: "Databases",
        probe: Probe::Command("redis-server"),
        recipe: Recipe {
            steps: &[
                Step::run("install Redis", "sudo", &["apt-get", "install", "-y", "redis-server"]),
                Step::run("enable Redis service", "sudo", &["systemctl", "enable", "redis-server"]),
                Step::run("start Redis service", "sudo", &["systemctl", "start", "redis-server"]),
            ],
            notes: &[],
        },
    },
    ServiceDef {
        id: "clickhouse",
        name: "ClickHouse",
        description: "Column-oriented analytics database",
        category: "Databases",
        probe: Probe::Command("clickhouse-server"),
        recipe: Recipe {
            steps: &[
                Step::run(
                    "install prerequisite packages",
                    "sudo",
                    &["apt-get", "install", "-y", "apt-transport-https", "ca-certificates", "curl", "gnupg"],
                ),
                Step::shell(
                    "add ClickHouse GPG key",
                    "curl -fsSL 'https://packages.clickhouse.com/rpm/lts/repodata/repomd.xml.key' | sudo gpg --dearmor --yes -o /usr/share/keyrings/clickhouse-keyring.gpg",
                ),
                Step::shell(
                    "add ClickHouse repository",
                    "ARCH=$(dpkg --print-architecture) && echo \"deb [signed-by=/usr/share/keyrings/clickhouse-keyring.gpg arch=${ARCH}] https://packages.clickhouse.com/deb stable main\" | sudo tee /etc/apt/sources.list.d/clickhouse.list > /dev/null",
                ),
                APT_UPDATE,
                Step::run(
                    "install ClickHouse server and client",
                    "sudo",
                    &["apt-get", "install", "-y", "clickhouse-server", "clickhouse-client"],
                ),
                Step::run("enable ClickHouse service", "sudo", &["systemctl", "enable", "clickhouse-server"]),
                Step::run("start ClickHouse service", "sudo", &["systemctl", "start", "clickhouse-server"]),
            ],
            notes: &["Connect with: clickhouse-client"],
        },
    },
    ServiceDef {
        id: "elasticsearch",
        name: "Elasticsearch",
        description: "Distributed search and analytics engine",
        category: "Databases",
        probe: Probe::Path("/usr/share/elasticsearch/bin/elasticsearch"),
        recipe: Recipe {
            steps: &[
                Step::shell(
                    "add Elasticsearch GPG key",
                    "wget -qO - https://artifacts.elastic.co/GPG-KEY-elasticsearch | sudo gpg --dearmor --yes -o /usr/share/keyrings/elasticsearch-keyring.gpg",
                ),
                Step::run(
                    "install apt-transport-https",
                    "sudo",
                    &["apt-get", "install", "-y", "apt-transport-https"],
                ),
                Step::shell(
                    "add Elasticsearch repository",
                    "echo \"deb [signed-by=/usr/share/keyrings/elasticsearch-keyring.gpg] https://artifacts.elastic.co/packages/9.x/apt stable main\" | sudo tee /etc/apt/sources.list.d/elastic-9.x.list > /dev/null",
                ),
                APT_UPDATE,
                Step::run("install Elasticsearch", "sudo", &["apt-get", "install", "-y", "elasticsearch"]),
                DAEMON_RELOAD,
                Step::run(
                    "enable Elasticsearch service",
                    "sudo",
                    &["systemctl", "enable", "elasticsearch.service"],
                ),
                Step::run(
                    "start Elasticsearch service",
                    "sudo",
                    &["systemctl", "start", "elasticsearch.service"],
                ),
            ],
            notes: &["Elasticsearch listens on localhost:9200"],
        },
    },
    // -- Storage --
    ServiceDef {
        id: "rustfs",
        name: "RustFS",
        description: "High-performance object storage system",
        category: "Storage",
        probe: Probe::Path("/usr/local/bin/rustfs"),
        recipe: Recipe {
            steps: &[
                Step::run(
                    "download RustFS installer",
                    "curl",
                    &["-fsSL", "-o", "/tmp/install_rustfs.sh", "https://rustfs.com/install_rustfs.sh"],
                ),
                Step::shell(
                    "install RustFS",
                    "printf '1\\n9000\\n9001\\n/data/rustfs0\\n' | sudo bash /tmp/install_rustfs.sh",
                ),
                Step::run("clean up installer", "rm", &["-f", "/tmp/install_rustfs.sh"]).optional(),
            ],
            notes: &["S3 API on port 9000, console on port 9001"],
        },
    },
    ServiceDef {
        id: "seaweedfs",
        name: "SeaweedFS",
        description: "Distributed file system and S3-compatible object store",
        category: "Storage",
        probe: Probe::AnyOf(&[
            Probe::Command("weed"),
            Probe::Path("/etc/systemd/system/seaweedfs.service"),
        ]),
        recipe: Recipe {
            steps: &[
                Step::shell(
                    "download SeaweedFS",
                    "curl -fsSL -o /tmp/seaweedfs.tar.gz \"https://github.com/seaweedfs/seaweedfs/releases/latest/download/linux_$(dpkg --print-architecture).tar.gz\"",
                ),
                Step::run("extract SeaweedFS", "sudo", &["tar", "-xzf", "/tmp/seaweedfs.tar.gz", "-C", "/usr/local/bin"]),
                Step::run("clean up archive", "rm", &["-f", "/tmp/seaweedfs.tar.gz"]).optional(),
            ],
            notes: &["Start a single-node server with: weed server -s3"],
        },
    },
    // -- Development --
    ServiceDef {
        id: "nodejs",
        name: "Node.js",
        description: "JavaScript runtime environment",
        category: "Development",
        probe: Probe::Command("node"),
        recipe: Recipe {
            steps: &[
                Step::shell(
                    "add NodeSource repository",
                    "curl -fsSL https://deb.nodesource.com/setup_lts.x | sudo -E bash -",
                ),
                APT_UPDATE,
                Step::run("install Node.js and npm", "sudo", &["apt-get", "install", "-y", "nodejs"]),
                Step::run("verify Node.js", "node", &["--version"]),
            ],
            notes: &[],
        },
    },
    ServiceDef {
        id: "golang",
        name: "Go",
        description: "Go programming language compiler and tools",
        category: "Development",
        probe: Probe::AnyOf(&[Probe::Command("go"), Probe::Path("/usr/local/go/bin/go")]),
        recipe: Recipe {
            steps: &[
                Step::shell(
                    "download the latest Go release",
                    "curl -fsSL -o /tmp/go.tar.gz \"https://go.dev/dl/$(curl -fsSL 'https://go.dev/VERSION?m=text' | head -n1).linux-$(dpkg --print-architecture).tar.gz\"",
                ),
                Step::run("remove previous Go installation", "sudo", &["rm", "-rf", "/usr/local/go"]),
                Step::run("extract Go", "sudo", &["tar", "-C", "/usr/local", "-xzf", "/tmp/go.tar.gz"]),
                Step::run("clean up archive", "rm", &["-f", "/tmp/go.tar.gz"]).optional(),
            ],
            notes: &["Add Go to your PATH: export PATH=$PATH:/usr/local/go/bin"],
        },
    },
    ServiceDef {
        id: "python",
        name: "Python",
        description: "Python 3 interpreter with pip and venv",
        category: "Development",
        probe: Probe::Command("python3"),
        recipe: Recipe {
            steps: &[
                APT_UPDATE,
                Step::run(
                    "install Python",
                    "sudo",
                    &["apt-get", "install", "-y", "python3", "python3-pip", "python3-venv", "python3-dev"],
                ),
            ],
            notes: &["Verify with: python3 --version"],
        },
    },
    ServiceDef {
        id: "php",
        name: "PHP",
        description: "PHP runtime with Composer",
        category: "Development",
        probe: Probe::Command("php"),
        recipe: Recipe {
            steps: &[
                APT_UPDATE,
                Step::run(
                    "install PHP and common extensions",
                    "sudo",
                    &["apt-get", "install", "-y", "php-cli", "php-fpm", "php-curl", "php-mbstring", "php-xml", "php-zip"],
                ),
                Step::run(
                    "download Composer installer",
                    "curl",
                    &["-sS", "-o", "/tmp/composer-setup.php", "https://getcomposer.org/installer"],
                ),
                Step::run(
                    "install Composer",
                    "sudo",
                    &["php", "/tmp/composer-setup.php", "--install-dir=/usr/local/bin", "--filename=composer"],
                ),
                Step::run("clean up Composer installer", "rm", &["-f", "/tmp/composer-setup.php"]).optional(),
            ],
            notes: &["Verify with: php --version && composer --version"],
        },
    },
    ServiceDef {
        id: "docker",
        name: "Docker",
        description: "Container platform for building and running applications",
        category: "Development",
        probe: Probe::Command("docker"),
        recipe: Recipe {
            steps: &[
                Step::run(
                    "remove conflicting packages",
                    "sudo",
                    &["apt-get", "remove", "-y", "docker.io", "docker-compose", "docker-doc", "podman-docker", "containerd", "runc"],
                )
                .optional(),
                APT_UPDATE,
                Step::run("install prerequisites", "sudo", &["apt-get", "install", "-y", "ca-certificates", "curl"]),
                Step::run("create keyrings directory", "sudo", &["install", "-m", "0755", "-d", "/etc/apt/keyrings"]),
                Step::run(
                    "download Docker GPG key",
                    "sudo",
                    &["curl", "-fsSL", "https://download.docker.com/linux/ubuntu/gpg", "-o", "/etc/apt/keyrings/docker.asc"],
                ),
                Step::run("set GPG key permissions", "sudo", &["chmod", "a+r", "/etc/apt/keyrings/docker.asc"]),
                Step::shell(
                    "add Docker repository",
                    "printf 'Types: deb\\nURIs: https://download.docker.com/linux/ubuntu\\nSuites: %s\\nComponents: stable\\nSigned-By: /etc/apt/keyrings/docker.asc\\n' \"$(. /etc/os-release && echo \"${UBUNTU_CODENAME:-$VERSION_CODENAME}\")\" | sudo tee /etc/apt/sources.list.d/docker.sources > /dev/null",
                ),
                APT_UPDATE,
                Step::run(
                    "install Docker Engine",
                    "sudo",
                    &["apt-get", "install", "-y", "docker-ce", "docker-ce-cli", "containerd.io", "docker-buildx-plugin", "docker-compose-plugin"],
                ),
            ],
            notes: &["Add yourself to the docker group: sudo usermod -aG docker $USER"],
        },
    },
    ServiceDef {
        id: "trivy",
        name: "Trivy",
        description: "Vulnerability scanner for containers and filesystems",
        category: "Development",
        probe: Probe::Command("trivy"),
        recipe: Recipe {
            steps: &[
                Step::run("install prerequisites", "sudo", &["apt-get", "install", "-y", "wget", "gnupg"]),
                Step::shell(
                    "add Trivy GPG key",
                    "wget -qO - https://aquasecurity.github.io/trivy-repo/deb/public.key | gpg --dearmor | sudo tee /usr/share/keyrings/trivy.gpg > /dev/null",
                ),
                Step::shell(
                    "add Trivy repository",
                    "echo \"deb [signed-by=/usr/share/keyrings/trivy.gpg] https://aquasecurity.github.io/trivy-repo/deb generic main\" | sudo tee /etc/apt/sources.list.d/trivy.list > /dev/null",
                ),
                APT_UPDATE,
                Step::run("install Trivy", "sudo", &["apt-get", "install", "-y", "trivy"]),
                Step::run("verify Trivy", "trivy", &["version"]),
            ],
            notes: &[
                "trivy image <image-name>     # Scan container images",
                "trivy fs <path>              # Scan filesystem",
            ],
        },
    },
    // -- Message Brokers --
    ServiceDef {
        id: "kafka",
        name: "Kafka",
        description: "Distributed streaming platform",
        category: "Message Brokers",
        probe: Probe::Path("/opt/kafka/bin/kafka-server-start.sh"),
        recipe: Recipe {
            steps: &[
                Step::run("install Java runtime", "sudo", &["apt-get", "install", "-y", "default-jre-headless", "curl"]),
                Step::run(
                    "download Kafka",
                    "curl",
                    &["-fsSL", "-o", "/tmp/kafka.tgz", "https://downloads.apache.org/kafka/3.9.1/kafka_2.13-3.9.1.tgz"],
                ),
                Step::run("create Kafka directory", "sudo", &["mkdir", "-p", "/opt/kafka"]),
                Step::run(
                    "extract Kafka",
                    "sudo",
                    &["tar", "-xzf", "/tmp/kafka.tgz", "-C", "/opt/kafka", "--strip-components=1"],
                ),
                Step::run("clean up archive", "rm", &["-f", "/tmp/kafka.tgz"]).optional(),
            ],
            notes: &["Kafka is installed in /opt/kafka"],
        },
    },
    ServiceDef {
        id: "rabbitmq",
        name: "RabbitMQ",
        description: "Message broker implementing AMQP",
        category: "Message Brokers",
        probe: Probe::Command("rabbitmq-server"),
        recipe: Recipe {
            steps: &[
                APT_UPDATE,
                Step::run("install RabbitMQ server", "sudo", &["apt-get", "install", "-y", "rabbitmq-server"]),
                Step::run("enable RabbitMQ service", "sudo", &["systemctl", "enable", "rabbitmq-server"]),
                Step::run("start RabbitMQ service", "sudo", &["systemctl", "start", "rabbitmq-server"]),
                Step::run(
                    "enable management plugin",
                    "sudo",
                    &["rabbitmq-plugins", "enable", "rabbitmq_management"],
                )
                .optional(),
            ],
            notes: &["Management UI: http://localhost:15672"],
        },
    },
    // -- Monitoring --
    ServiceDef {
        id: "prometheus",
        name: "Prometheus",
        description: "Monitoring and alerting toolkit",
        category: "Monitoring",
        probe: Probe::Command("prometheus"),
        recipe: Recipe {
            steps: &[
                APT_UPDATE,
                Step::run("install Prometheus", "sudo", &["apt-get", "install", "-y", "prometheus"]),
                Step::run("enable Prometheus service", "sudo", &["systemctl", "enable", "prometheus"]),
                Step::run("start Prometheus service", "sudo", &["systemctl", "start", "prometheus"]),
            ],
            notes: &["Prometheus UI: http://localhost:9090"],
        },
    },
    ServiceDef {
        id: "grafana",
        name: "Grafana",
        description: "Analytics and monitoring platform",
        category: "Monitoring",
        probe: Probe::Command("grafana-server"),
        recipe: Recipe {
            steps: &[
                Step::run(
                    "install prerequisites",
                    "sudo",
                    &["apt-get", "install", "-y", "apt-transport-https", "software-properties-common", "wget"],
                ),
                Step::run("create keyrings directory", "sudo", &["mkdir", "-p", "/etc/apt/keyrings/"]),
                Step::shell(
                    "add Grafana GPG key",
                    "wget -q -O - https://apt.grafana.com/gpg.key | gpg --dearmor | sudo tee /etc/apt/keyrings/grafana.gpg > /dev/null",
                ),
                Step::shell(
                    "add Grafana repository",
                    "echo \"deb [signed-by=/etc/apt/keyrings/grafana.gpg] https://apt.grafana.com stable main\" | sudo tee /etc/apt/sources.list.d/grafana.list > /dev/null",
                ),
                APT_UPDATE,
                Step::run("install Grafana", "sudo", &["apt-get", "install", "-y", "grafana"]),
                DAEMON_RELOAD,
                Step::run("enable Grafana service", "sudo", &["systemctl", "enable", "grafana-server"]),
                Step::run("start Grafana service", "sudo", &["systemctl", "start", "grafana-server"]),
            ],
            notes: &["Grafana UI: http://localhost:3000 (admin / admin)"],
        },
    },
    ServiceDef {
        id: "alertmanager",
        name: "Alertmanager",
        description: "Handles alerts from Prometheus",
        category: "Monitoring",
        probe: Probe::Command("prometheus-alertmanager"),
        recipe: Recipe {
            steps: &[
                APT_UPDATE,
                Step::run(
                    "install Alertmanager",
                    "sudo",
                    &["apt-get", "install", "-y", "prometheus-alertmanager"],
                ),
                Step::run(
                    "enable Alertmanager service",
                    "sudo",
                    &["systemctl", "enable", "prometheus-alertmanager"],
                ),
                Step::run(
                    "start Alertmanager service",
                    "sudo",
                    &["systemctl", "start", "prometheus-alertmanager"],
                ),
            ],
            notes: &["Alertmanager UI: http://localhost:9093"],
        },
    },
    ServiceDef {
        id: "node_exporter",
        name: "Node Exporter",
        description: "Prometheus exporter for host metrics",
        category: "Monitoring",
        probe: Probe::AnyOf(&[
            Probe::Command("node_exporter"),
            Probe::Command("prometheus-node-exporter"),
        ]),
        recipe: Recipe {
            steps: &[
                APT_UPDATE,
                Step::run(
                    "install Node Exporter",
                    "sudo",
                    &["apt-get", "install", "-y", "prometheus-node-exporter"],
                ),
                Step::run(
                    "enable Node Exporter service",
                    "sudo",
                    &["systemctl", "enable", "--now", "prometheus-node-exporter"],
                ),
            ],
            notes: &["Metrics: http://localhost:9100/metrics"],
        },
    },
];

/// The catalog backed by [`SERVICES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    fn find(id: &str) -> Option<&'static ServiceDef> {
        SERVICES.iter().find(|s| s.id == id)
    }

    /// All known service identifiers, in registry order.
    pub fn service_ids(&self) -> Vec<&'static str> {
        SERVICES.iter().map(|s| s.id).collect()
    }
}

impl Catalog for BuiltinCatalog {
    fn services(&self) -> Vec<ServiceInfo> {
        SERVICES.iter().map(ServiceDef::info).collect()
    }

    fn category_order(&self) -> Vec<String> {
        CATEGORY_ORDER.iter().map(|c| (*c).to_string()).collect()
    }

    fn is_installed(&self, id: &str) -> bool {
        Self::find(id).is_some_and(|s| s.probe.check())
    }

    fn installer_for(&self, id: &str) -> Result<Installer, CatalogError> {
        let service = Self::find(id).ok_or_else(|| CatalogError::UnknownService(id.to_string()))?;
        Ok(Installer::new(service.id, &service.recipe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_service_ids_are_unique() {
        let ids = BuiltinCatalog::new().service_ids();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len(), "duplicate service ids found");
    }

    #[test]
    fn test_every_category_is_ordered() {
        for service in SERVICES {
            assert!(
                CATEGORY_ORDER.contains(&service.category),
                "{} has unordered category {}",
                service.id,
                service.category
            );
        }
    }

    #[test]
    fn test_every_recipe_has_steps() {
        for service in SERVICES {
            assert!(!service.recipe.steps.is_empty(), "{} has no steps", service.id);
        }
    }

    #[test]
    fn test_installer_for_known_service() {
        let installer = BuiltinCatalog::new()
            .installer_for("redis")
            .expect("redis is registered");
        assert_eq!(installer.id(), "redis");
        assert_eq!(installer.recipe().steps.len(), 3);
    }

    #[test]
    fn test_installer_for_unknown_service() {
        let err = BuiltinCatalog::new()
            .installer_for("nonexistent")
            .expect_err("not registered");
        assert!(matches!(err, CatalogError::UnknownService(ref id) if id == "nonexistent"));
    }

    #[test]
    fn test_is_installed_unknown_service_is_false() {
        assert!(!BuiltinCatalog::new().is_installed("nonexistent"));
    }

    #[test]
    fn test_services_preserve_registry_order() {
        let services = BuiltinCatalog::new().services();
        assert_eq!(services[0].id, "nginx");
        assert_eq!(services[1].id, "caddy");
        assert_eq!(services.len(), SERVICES.len());
    }
}
