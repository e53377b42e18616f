use spyglass_core::models::{projects_from_json, Project};

/// A small portfolio in the JSON shape the query layer produces,
/// covering every matching mode: project-level, service-level and
/// task-level matches, mixed statuses, and a service-less project.
pub fn sample_portfolio() -> Vec<Project> {
    projects_from_json(
        r#"[
            {
                "id": 1,
                "name": "Website Redesign",
                "services": [
                    {
                        "id": 10,
                        "serviceName": "Design",
                        "tasks": [
                            {"id": 100, "name": "Draft homepage", "taskStatus": {"name": "In Progress"}},
                            {"id": 101, "name": "Review mockups", "taskStatus": {"name": "Completed"}}
                        ]
                    },
                    {
                        "id": 11,
                        "serviceName": "Content",
                        "tasks": [
                            {"id": 110, "name": "Write copy", "taskStatus": {"name": "Pending"}}
                        ]
                    }
                ]
            },
            {
                "id": 2,
                "name": "Acme Launch",
                "services": [
                    {
                        "id": 20,
                        "serviceName": "SEO Audit",
                        "tasks": [
                            {"id": 200, "name": "Write SEO brief", "taskStatus": {"name": "Pending"}},
                            {"id": 201, "name": "Publish report", "taskStatus": {"name": "Completed"}}
                        ]
                    },
                    {
                        "id": 21,
                        "serviceName": "Ads",
                        "tasks": [
                            {"id": 210, "name": "Plan campaign", "taskStatus": {"name": "Blocked"}}
                        ]
                    }
                ]
            },
            {
                "id": 3,
                "name": "Legacy Migration",
                "services": [
                    {
                        "id": 30,
                        "serviceName": "Cleanup",
                        "tasks": [
                            {"id": 300, "name": "Drop old tables", "taskStatus": {"name": "Completed"}}
                        ]
                    }
                ]
            },
            {
                "id": 4,
                "name": "Mobile App",
                "services": []
            }
        ]"#,
    )
    .expect("sample portfolio should parse")
}
