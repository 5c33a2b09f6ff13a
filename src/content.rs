//! Portfolio copy rendered by the page templates.

pub const OWNER_NAME: &str = "Sidarth Murali";
pub const OWNER_TAGLINE: &str = "B.Tech CCE Student & Innovative Developer";
pub const HERO_FOCUS: &[&str] = &["Python", "IoT", "Web Development"];
pub const HERO_PITCH: &str = "I'm passionate about creating innovative solutions that bridge the gap \
    between technology and real-world problems. From IoT systems to blockchain applications, I love \
    turning complex ideas into elegant, working solutions.";

pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "about", label: "About" },
    Section { id: "skills", label: "Skills" },
    Section { id: "projects", label: "Projects" },
    Section { id: "involvement", label: "Leadership" },
    Section { id: "contact", label: "Contact" },
];

pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

pub const HERO_LINKS: &[Link] = &[
    Link {
        label: "Portfolio",
        url: "https://sidarth-murali.pages.dev/",
    },
    Link {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/sidarthmurali-63/",
    },
    Link {
        label: "Email",
        url: "mailto:iamsidarth@gmail.com",
    },
];

pub const ABOUT_INTRO: &str = "I'm a B.Tech student in Computer and Communication Engineering who \
    loves turning ideas into real, working solutions. I've worked on projects involving IoT, \
    blockchain, and AI, always with a focus on solving real-world problems.";

pub const ABOUT_JOURNEY: &[&str] = &[
    "I enjoy building things from scratch, learning as I go, and I'm not shy about using AI tools \
     to speed things up or explore new approaches.",
    "My experience spans from IoT sensor integration to blockchain development, with a focus on \
     creating practical solutions that address real-world challenges.",
];

pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "IoT & AI Development",
        description: "Experienced in OpenCV, YOLO models, and IoT sensor integration for real-world applications.",
    },
    Highlight {
        title: "Full Stack Development",
        description: "Building responsive applications with Angular, Flask, and modern web technologies.",
    },
    Highlight {
        title: "Blockchain Integration",
        description: "Implementing secure, tamper-proof data logging with Hyperledger and CouchDB.",
    },
];

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub details: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "B.Tech CCE",
        institution: "Amrita University",
        location: "Coimbatore",
        period: "2021 - 2025",
        details: "Computer and Communication Engineering",
    },
    Education {
        degree: "PCM, IP",
        institution: "Kathir Vidyaa Mandhir",
        location: "Coimbatore",
        period: "2020 - 2021",
        details: "Higher Secondary Education",
    },
    Education {
        degree: "Regular + FIIT",
        institution: "Delhi Public School",
        location: "Coimbatore",
        period: "2018 - 2019",
        details: "Secondary Education",
    },
];

/// Internships and other roles listed under the about section.
pub struct Experience {
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub points: &'static [&'static str],
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Intern - IntersectIQ",
        period: "July 2024 - September 2024",
        location: "Remote",
        points: &[
            "Leveraged OpenCV to implement YOLOv10 models for image processing",
            "Conducted image annotation for industrial datasets, enhancing model accuracy",
            "Learned and applied MQTT and OPC-UA protocols for client data transfer",
            "Collaborated with experienced mentors, utilizing Git for version control",
        ],
    },
    Experience {
        role: "Intern - TATA Telecommunications",
        period: "July 2023 - August 2023",
        location: "Chennai",
        points: &[
            "Collaborated in a 4-member team to develop a responsive CRUD interface using Angular 12 and Flask",
            "Integrated a MySQL database for efficient data management and storage",
            "Used Git for version control across the team",
        ],
    },
];

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming Languages",
        skills: &["Python", "SQL", "Java basics", "JavaScript"],
    },
    SkillCategory {
        title: "AI & Computer Vision",
        skills: &["OpenCV", "YOLO", "Machine Learning", "Computer Vision"],
    },
    SkillCategory {
        title: "Web Development",
        skills: &["Flask", "HTML/CSS", "Git"],
    },
    SkillCategory {
        title: "IoT & Hardware",
        skills: &["IoT", "MQTT", "OPC-UA", "Sensor Integration"],
    },
    SkillCategory {
        title: "Soft Skills",
        skills: &["Project Management", "Presentation", "Teamwork", "Time Management"],
    },
    SkillCategory {
        title: "Languages",
        skills: &["English", "Tamil", "Hindi (basic)"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub period: &'static str,
    pub organization: &'static str,
    pub source_url: &'static str,
    pub details: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "ColdBlox - Cold Chain Monitoring System",
        description: "A research-driven cold chain monitoring system with IoT sensors, blockchain \
            integration, and real-time dashboard for logistics tracking.",
        technologies: &["IoT", "Hyperledger", "CouchDB", "Supabase", "GSM", "Python"],
        period: "June 2024 - June 2025",
        organization: "Amrita Vishwa Vidyapeetham",
        source_url: "https://github.com/SID63/ColdBlox",
        details: &[
            "Collaborated with 4 peers under faculty mentorship to build a research-driven cold chain monitoring system",
            "Deployed 2 remote slave nodes and 1 master node to simulate real-world logistics",
            "Integrated IoT sensors for real-time temperature and humidity tracking with GSM-based data transmission",
            "Used Hyperledger + CouchDB for secure, tamper-proof data logging",
            "Developed a Supabase-based web dashboard for live monitoring, alerts, and CSV exports",
        ],
    },
    Project {
        title: "Bus Overload and Rash Driving Detection",
        description: "Real-time passenger counting and rash driving detection system using \
            computer vision and IoT sensors.",
        technologies: &["OpenCV", "MobileNet SSD", "MQTT", "HiveMQ", "Gyroscope", "Python"],
        period: "January 2024 - June 2024",
        organization: "Amrita Vishwa Vidyapeetham",
        source_url: "https://github.com/SID63/ppl-count",
        details: &[
            "Collaborated with 4 peers under faculty guidance as part of a department-wide Open Lab innovation initiative",
            "Achieved over 90% accuracy in real-time passenger counting using MobileNet SSD and Centroid Tracker",
            "Enabled instant alerts and live data visualization by integrating HiveMQ MQTT and a custom-built dashboard",
            "Simulated and tracked 5+ driving scenarios using a gyroscope and Xbox controller to detect abrupt movements",
            "Designed to support scalability across multiple vehicles for future real-world deployment",
        ],
    },
    Project {
        title: "Discord Chat Bot",
        description: "A multifunctional chatbot for entertainment and utilities serving a \
            community of 1,000+ users.",
        technologies: &["discord.py", "YouTube API", "Weather API", "Reddit API", "Python"],
        period: "January 2020 - May 2020",
        organization: "Passion Project",
        source_url: "https://github.com/gojiraa-bot/my-first-discord.py-bot",
        details: &[
            "Created a multifunctional chatbot to automate entertainment and utilities for a community of 1,000+ users",
            "Posted trending memes from Reddit, increasing engagement",
            "Provided real-time weather updates using the Weather API",
            "Integrated YouTube API for music playback in voice channels, supporting queueing, looping, and volume control",
        ],
    },
    Project {
        title: "Gesture Volume Control",
        description: "Python-based hand gesture recognition app that controls system volume via \
            webcam using MediaPipe and OpenCV.",
        technologies: &["Python", "OpenCV", "MediaPipe", "NumPy", "pycaw", "Windows"],
        period: "May 2020",
        organization: "Passion Project",
        source_url: "https://github.com/SID63/gesture-vol-control",
        details: &[
            "Real-time hand tracking with 21-point landmarks and gesture state detection",
            "Thumb-index pinch maps to smooth volume changes with interpolation",
            "Visual feedback overlay with volume bar, percentage, and FPS at 30+ FPS",
        ],
    },
];

pub struct Involvement {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

pub const INVOLVEMENTS: &[Involvement] = &[
    Involvement {
        title: "Head",
        organization: "Amrita University - Anokha'24",
        period: "January 2024 - September 2024",
        achievements: &[
            "Oversaw planning and execution of 50+ tech stalls and exhibitions, leading a team of 20 volunteers",
            "Coordinated with industry partners and student teams; ensured 3,000+ visitor footfall",
            "Collaborated with sponsors and industry professionals to set up demo spaces",
            "Oversaw design of stall layout and signage for better foot traffic management",
        ],
    },
    Involvement {
        title: "Co-Head",
        organization: "Amrita University - Anokha'23",
        period: "July 2023 - August 2023",
        achievements: &[
            "Managed scheduling, stall layout, and volunteer coordination for 21+ student tech projects",
            "Handled last-minute logistics, AV equipment setup, and issue resolution during the event",
        ],
    },
    Involvement {
        title: "Class Representative",
        organization: "Amrita University",
        period: "February 2022 - June 2024",
        achievements: &[
            "Represented a batch of 78 students, acting as liaison between faculty and students",
            "Organized academic discussions, managed feedback collection",
            "Coordinated class schedules, attendance reporting, and session rescheduling",
        ],
    },
];

pub struct Channel {
    pub title: &'static str,
    pub value: &'static str,
    /// `None` for channels that are not links.
    pub link: Option<&'static str>,
}

pub const CHANNELS: &[Channel] = &[
    Channel {
        title: "Email",
        value: "iamsidarth@gmail.com",
        link: Some("mailto:iamsidarth@gmail.com"),
    },
    Channel {
        title: "LinkedIn",
        value: "linkedin.com/in/sidarthmurali-63",
        link: Some("https://linkedin.com/in/sidarthmurali-63"),
    },
    Channel {
        title: "Location",
        value: "Chennai, Tamil Nadu, India",
        link: None,
    },
];
