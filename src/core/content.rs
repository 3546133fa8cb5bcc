// Static site content. Edit these tables to change what the page shows;
// the markup functions only ever read them.

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct CtfProfile {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ContactInfo {
    pub email: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
    pub intro: &'static str,
    pub socials: &'static [SocialLink],
    pub ctf: &'static [CtfProfile],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Audit Sécurité Infrastructure",
        description: "Analyse complète des vulnérabilités d'une infrastructure d'entreprise avec mise en place de recommandations de remédiation et hardening.",
        tags: &["Pentest", "Nmap", "Metasploit", "Burp Suite"],
        link: "https://github.com/Dow08",
        icon: "fas fa-search",
    },
    Project {
        title: "SOC Monitoring Dashboard",
        description: "Développement d'un tableau de bord de surveillance sécurité en temps réel avec alertes personnalisées et corrélation d'événements.",
        tags: &["SIEM", "Python", "ELK Stack", "Grafana"],
        link: "https://github.com/Dow08",
        icon: "fas fa-shield-alt",
    },
    Project {
        title: "Automatisation DevSecOps",
        description: "Pipeline CI/CD sécurisé avec intégration de scans de vulnérabilités automatisés et tests de sécurité continus.",
        tags: &["GitHub Actions", "Docker", "OWASP ZAP", "SonarQube"],
        link: "https://github.com/Dow08",
        icon: "fas fa-cogs",
    },
    Project {
        title: "CTF Write-ups Collection",
        description: "Documentation détaillée des challenges CTF résolus sur TryHackMe et HackTheBox avec méthodologies d'exploitation.",
        tags: &["CTF", "Writeups", "Exploitation", "Forensics"],
        link: "https://github.com/Dow08",
        icon: "fas fa-spider",
    },
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Cybersécurité",
        icon: "fas fa-shield-alt",
        items: &["Pentest", "SIEM/SOC", "OWASP Top 10", "Forensics", "Threat Hunting", "Incident Response"],
    },
    SkillCategory {
        title: "Développement",
        icon: "fas fa-code",
        items: &["Python", "JavaScript", "SQL", "API REST", "Bash/PowerShell", "Git"],
    },
    SkillCategory {
        title: "Réseau & Infrastructure",
        icon: "fas fa-network-wired",
        items: &["Linux", "Windows Server", "Active Directory", "Cloud AWS/Azure", "Docker", "Firewall"],
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "99.9%", label: "Uptime" },
    Stat { value: "15min", label: "Response" },
    Stat { value: "200+", label: "Systems" },
    Stat { value: "350+", label: "Threats" },
];

pub const CONTACT: ContactInfo = ContactInfo {
    email: "Dow@ikmail.com",
    location: "France",
    availability: "Ouvert aux opportunités",
    intro: "Je suis toujours ouvert aux discussions sur la cybersécurité, les opportunités de stage/alternance, ou simplement pour échanger sur les dernières techniques de sécurité offensive et défensive.",
    socials: &[
        SocialLink { name: "GitHub", icon: "fab fa-github", url: "https://github.com/Dow08" },
        SocialLink { name: "LinkedIn", icon: "fab fa-linkedin", url: "https://www.linkedin.com/in/dorian-poncelet-1807612b5" },
        SocialLink { name: "Twitter", icon: "fab fa-twitter", url: "https://twitter.com/Dow163877" },
    ],
    ctf: &[
        CtfProfile {
            name: "TryHackMe",
            icon: "fas fa-flag",
            url: "https://tryhackme.com/p/seallia81",
            text: "Voir mon profil TryHackMe",
        },
        CtfProfile {
            name: "HackTheBox",
            icon: "fas fa-cube",
            url: "https://ctf.hackthebox.com/user/profile/1010141",
            text: "Voir mon profil HackTheBox",
        },
    ],
};
