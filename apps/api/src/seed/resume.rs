//! Fixed résumé content written on first start.

use crate::models::resume::{NewEducation, NewExperience, NewProfile, NewProject, NewSkill};

const GITHUB_URL: &str = "https://github.com";
const LINKEDIN_URL: &str = "https://linkedin.com";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn profile() -> NewProfile {
    NewProfile {
        name: "Shruti Zalavadiya".to_string(),
        title: "Data Engineer".to_string(),
        bio: "Data Analyst Intern and Master’s student in Advanced Computing with hands-on \
              experience in Python, SQL, Power BI, and Excel. Skilled in building automated ETL \
              pipelines, performing exploratory data analysis (EDA), and developing interactive \
              dashboards. Strong foundation in data preprocessing, statistical analysis, and \
              database management (PostgreSQL). Passionate about applying analytical skills to \
              solve business problems and drive data-informed decisions."
            .to_string(),
        email: "shrutizalavadiya24@gmail.com".to_string(),
        phone: "+91-63524 13914".to_string(),
        location: "Surat, Gujarat".to_string(),
        linkedin: Some(LINKEDIN_URL.to_string()),
        github: Some(GITHUB_URL.to_string()),
    }
}

pub fn skills() -> Vec<NewSkill> {
    let groups: [(&str, &[&str]); 5] = [
        ("Analytical Tools", &["Excel", "Power BI", "Power Query"]),
        ("Languages", &["Python", "SQL"]),
        (
            "Technologies/Frameworks",
            &[
                "GitHub",
                "Pandas",
                "NumPy",
                "Matplotlib",
                "Seaborn",
                "Flask",
                "Power Automate",
                "n8n",
            ],
        ),
        ("Databases", &["PostgreSQL"]),
        (
            "Soft Skills",
            &["Problem-solving", "Collaboration", "Adaptability"],
        ),
    ];
    groups
        .into_iter()
        .map(|(category, items)| NewSkill {
            category: category.to_string(),
            items: strings(items),
        })
        .collect()
}

pub fn experience() -> Vec<NewExperience> {
    vec![NewExperience {
        company: "Ybai Solutions".to_string(),
        role: "Data Analyst Intern".to_string(),
        duration: "Feb 2025 – Present".to_string(),
        description: strings(&[
            "Built automated data pipelines using Python/Selenium, reducing manual data collection time by 80%.",
            "Designed ETL workflows with Flask API to support analytics projects.",
            "Created n8n workflows.",
            "Created interactive Power BI dashboards that improved competitor tracking and pricing analysis.",
            "Contributed to data gathering and preprocessing for AI/ML projects.",
            "Developed an end-to-end Azure Data Engineering pipeline integrating Data Lake, Databricks, SQL Database, and Power BI for data processing and analytics.",
        ]),
    }]
}

pub fn projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "Wearables Data Pipeline".to_string(),
            tech_stack: strings(&["Python", "Selenium", "Flask", "n8n", "Power BI"]),
            description: strings(&[
                "Built an end-to-end data pipeline to scrape, clean, and store data.",
                "Integrated with n8n automation workflows to automatically upload processed datasets to OneDrive post-scraping.",
                "Delivered interactive Power BI dashboards for real-time price and availability insights.",
            ]),
            link: Some(GITHUB_URL.to_string()),
        },
        NewProject {
            title: "Hotel Booking Cancellation Analysis".to_string(),
            tech_stack: strings(&["Python", "Pandas", "Matplotlib", "Seaborn"]),
            description: strings(&[
                "Analyzed hotel reservation data to identify key cancellation factors.",
                "Suggested dynamic pricing and targeted campaigns to reduce cancellations.",
            ]),
            link: Some(GITHUB_URL.to_string()),
        },
        NewProject {
            title: "Superstore Sales Analysis".to_string(),
            tech_stack: strings(&["Power BI", "DAX", "Excel"]),
            description: strings(&[
                "Created a Power BI dashboard for sales trends, forecasting, and profitability KPIs.",
                "Enabled data-driven decisions for revenue and inventory planning.",
            ]),
            link: Some(GITHUB_URL.to_string()),
        },
    ]
}

pub fn education() -> Vec<NewEducation> {
    vec![
        NewEducation {
            institution: "Sarvajanik College of Engineering and Technology".to_string(),
            degree: "MSc Advanced Computing".to_string(),
            year: "Pursuing".to_string(),
        },
        NewEducation {
            institution: "Bhagwan Mahavir University".to_string(),
            degree: "BSc Information Technology".to_string(),
            year: "2021 – 2024".to_string(),
        },
    ]
}
