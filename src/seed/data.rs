//! Fixed reference and sample data written by the initializer.
//!
//! Units name their department by code and employees name their unit by
//! unit name; ids are resolved when the rows are inserted.

use crate::entities::sea_orm_active_enums::Gender;

/// Seed row for `departments`.
#[derive(Debug, Clone, Copy)]
pub struct DepartmentSeed {
    pub code: &'static str,
    pub name: &'static str,
}

/// Seed row for `units`.
#[derive(Debug, Clone, Copy)]
pub struct UnitSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub department_code: &'static str,
}

/// Seed row for `employees`. Dates are ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeSeed {
    pub employee_code: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub date_of_birth: &'static str,
    pub gender: Gender,
    pub joined_date: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub unit_name: &'static str,
}

macro_rules! department {
    ($code:expr, $name:expr) => {
        DepartmentSeed {
            code: $code,
            name: $name,
        }
    };
}

macro_rules! unit {
    ($department:expr, $name:expr, $description:expr) => {
        UnitSeed {
            name: $name,
            description: $description,
            department_code: $department,
        }
    };
}

macro_rules! employee {
    ($code:expr, $first:expr, $last:expr, $dob:expr, $gender:ident, $joined:expr, $email:expr, $phone:expr, $address:expr, $unit:expr) => {
        EmployeeSeed {
            employee_code: $code,
            first_name: $first,
            last_name: $last,
            date_of_birth: $dob,
            gender: Gender::$gender,
            joined_date: $joined,
            email: $email,
            phone: $phone,
            address: $address,
            unit_name: $unit,
        }
    };
}

pub const DEPARTMENTS: &[DepartmentSeed] = &[
    department!("D001", "Information Technology"),
    department!("D002", "Finance & Accounting"),
    department!("D003", "Human Resource"),
    department!("D004", "Sales & Marketing"),
    department!("D005", "Research & Development"),
    department!("D006", "Administration"),
    department!("D007", "Security"),
    department!("D008", "Manufacturing"),
    department!("D009", "Operation"),
    department!("D010", "Customer Service"),
    department!("D011", "Business Development"),
    department!("D012", "Logistics"),
];

pub const UNITS: &[UnitSeed] = &[
    unit!(
        "D001",
        "Software Development",
        "Responsible for designing, developing, and maintaining software applications tailored to meet organizational needs"
    ),
    unit!(
        "D001",
        "Infrastructure Management",
        "Manages and maintains the organization's IT infrastructure, including networks, servers, and systems, ensuring reliability and performance"
    ),
    unit!(
        "D002",
        "Accounts Payable",
        "Handles the timely and accurate processing of payments to suppliers and vendors, ensuring compliance with financial policies and regulations"
    ),
    unit!(
        "D002",
        "Financial Reporting",
        "Prepares and analyzes financial statements, reports, and forecasts to support strategic decision-making and ensure regulatory compliance"
    ),
    unit!(
        "D003",
        "Recruitment and Talent Acquisition",
        "Manages the recruitment process, including sourcing, screening, and onboarding new talent, while also developing strategies to attract and retain top performers"
    ),
    unit!(
        "D003",
        "Employee Relations and Compliance",
        "Handles employee relations matters, ensures compliance with labor laws and regulations, and fosters a positive work environment through effective policies and practices"
    ),
    unit!(
        "D004",
        "Sales Strategy and Planning",
        "Develops sales strategies, plans, and targets to drive revenue growth and market penetration, while also analyzing market trends and customer needs"
    ),
    unit!(
        "D004",
        "Digital Marketing and Social Media",
        "Executes digital marketing campaigns, manages social media channels, and utilizes online platforms to enhance brand awareness, engagement, and lead generation"
    ),
    unit!(
        "D005",
        "Product Innovation",
        "Leads the development of new products or services through research, prototyping, and testing, focusing on meeting customer needs and staying ahead of market trends"
    ),
    unit!(
        "D005",
        "Market Research",
        "Conducts market research and analysis to identify opportunities, assess competition, and gather insights to inform product development, marketing strategies, and business decisions"
    ),
    unit!(
        "D006",
        "Office Management",
        "Manages administrative tasks such as office supplies, facilities maintenance, and administrative support services to ensure smooth daily operations"
    ),
    unit!(
        "D006",
        "Facilities and Maintenance",
        "Oversees the maintenance and upkeep of physical facilities, including buildings, equipment, and utilities, to ensure a safe and efficient work environment"
    ),
    unit!(
        "D007",
        "Physical Security",
        "Implements measures to protect physical assets, premises, and personnel through surveillance, access control, and security protocols"
    ),
    unit!(
        "D007",
        "Information Security",
        "Safeguards digital assets, data, and information systems from unauthorized access, breaches, and cyber threats through policies, procedures, and technologies"
    ),
    unit!(
        "D008",
        "Production Planning",
        "Plans and schedules production activities, manages inventory levels, and optimizes resource allocation to meet production targets and customer demand"
    ),
    unit!(
        "D008",
        "Quality Control",
        "Implements quality assurance processes, conducts inspections, and ensures adherence to quality standards and specifications throughout the manufacturing process"
    ),
    unit!(
        "D009",
        "Supply Chain Management",
        "Manages the end-to-end supply chain, from procurement to distribution, to optimize efficiency, minimize costs, and ensure timely delivery of goods and services"
    ),
    unit!(
        "D009",
        "Process Improvement",
        "Identifies inefficiencies, bottlenecks, and opportunities for optimization within operational processes, and implements initiatives to enhance productivity, quality, and customer satisfaction"
    ),
    unit!(
        "D010",
        "Customer Support",
        "Provides frontline assistance to customers, resolves inquiries, issues, and complaints, and delivers exceptional service to enhance customer satisfaction and loyalty"
    ),
    unit!(
        "D010",
        "Service Excellence",
        "Develops and implements strategies, training programs, and service standards to ensure consistent delivery of exceptional customer experiences across all touchpoints"
    ),
    unit!(
        "D011",
        "Partnership and Alliances",
        "Identifies and cultivates strategic partnerships, alliances, and collaborations with other organizations to expand market reach, drive growth, and unlock new opportunities"
    ),
    unit!(
        "D011",
        "New Market Exploration",
        "Conducts market research and feasibility studies to identify and assess new market opportunities, develops entry strategies, and drives initiatives to penetrate and establish presence in those markets"
    ),
    unit!(
        "D012",
        "Inventory Management",
        "Manages inventory levels, replenishment processes, and stock control systems to ensure optimal inventory turnover, minimize stockouts, and reduce carrying costs"
    ),
    unit!(
        "D012",
        "Transportation and Distribution",
        "Coordinates the movement of goods, materials, and products from suppliers to customers through efficient transportation and distribution networks, optimizing routes, modes, and delivery schedules"
    ),
];

pub const EMPLOYEES: &[EmployeeSeed] = &[
    employee!(
        "10001", "John", "Doe", "1990-05-15", Male, "2020-01-10",
        "john.doe@example.com", "+65 9123 4567",
        "123 Main Street, #01-234, Singapore 123456",
        "Software Development"
    ),
    employee!(
        "10002", "Jane", "Smith", "1985-08-20", Female, "2018-03-25",
        "jane.smith@example.com", "+65 9876 5432",
        "456 Orchard Road, #05-678, Singapore 654321",
        "Infrastructure Management"
    ),
    employee!(
        "10003", "Mike", "Johnson", "1992-11-03", Male, "2019-07-18",
        "mike.johnson@example.com", "+65 8765 4321",
        "789 Marina Bay, #10-111, Singapore 789012",
        "Financial Reporting"
    ),
    employee!(
        "10004", "Sara", "Lee", "1988-04-12", Female, "2021-05-30",
        "sara.lee@example.com", "+65 7654 3210",
        "101 Raffles Place, #03-222, Singapore 101234",
        "Recruitment and Talent Acquisition"
    ),
    employee!(
        "10005", "David", "Ng", "1995-09-25", Male, "2017-12-05",
        "david.ng@example.com", "+65 6543 2109",
        "202 Serangoon Road, #08-333, Singapore 202345",
        "Product Innovation"
    ),
    employee!(
        "10006", "Emily", "Tan", "1993-02-18", Female, "2022-02-15",
        "emily.tan@example.com", "+65 5432 1098",
        "303 Bukit Timah, #12-444, Singapore 303456",
        "Information Security"
    ),
    employee!(
        "10007", "Robert", "Wong", "1984-07-07", Male, "2016-10-22",
        "robert.wong@example.com", "+65 4321 0987",
        "404 Jurong West, #15-555, Singapore 404567",
        "Transportation and Distribution"
    ),
    employee!(
        "10008", "Eva", "Lim", "1998-12-30", Female, "2023-08-08",
        "eva.lim@example.com", "+65 3210 9876",
        "505 Holland Drive, #18-666, Singapore 505678",
        "Product Innovation"
    ),
    employee!(
        "10009", "Chris", "Goh", "1987-06-09", Male, "2020-11-12",
        "chris.goh@example.com", "+65 2109 8765",
        "606 East Coast, #21-777, Singapore 606789",
        "Market Research"
    ),
    employee!(
        "10010", "Mia", "Chua", "1991-03-27", Female, "2018-04-28",
        "mia.chua@example.com", "+65 1098 7654",
        "707 Woodlands Ave, #24-888, Singapore 707890",
        "Accounts Payable"
    ),
    employee!(
        "10011", "Kevin", "Tan", "1994-06-14", Male, "2019-02-08",
        "kevin.tan@example.com", "+65 9876 5432",
        "123 Bukit Batok, #01-234, Singapore 123789",
        "Digital Marketing and Social Media"
    ),
    employee!(
        "10012", "Sophie", "Lau", "1989-09-03", Female, "2020-07-15",
        "sophie.lau@example.com", "+65 8765 4321",
        "456 Yishun Ave, #05-678, Singapore 456012",
        "Sales Strategy and Planning"
    ),
    employee!(
        "10013", "Jason", "Ong", "1996-01-22", Male, "2018-04-18",
        "jason.ong@example.com", "+65 7654 3210",
        "789 Tampines Street, #10-111, Singapore 789345",
        "Supply Chain Management"
    ),
    employee!(
        "10014", "Ella", "Chong", "1986-12-08", Female, "2022-01-30",
        "ella.chong@example.com", "+65 6543 2109",
        "101 Clementi Road, #03-222, Singapore 101678",
        "Quality Control"
    ),
    employee!(
        "10015", "Tom", "Lim", "1990-07-17", Male, "2017-11-25",
        "tom.lim@example.com", "+65 5432 1098",
        "202 Queenstown Drive, #08-333, Singapore 202901",
        "Recruitment and Talent Acquisition"
    ),
    employee!(
        "10016", "Grace", "Yeo", "1992-04-05", Female, "2023-05-20",
        "grace.yeo@example.com", "+65 4321 0987",
        "303 Bedok North, #12-444, Singapore 303234",
        "Infrastructure Management"
    ),
    employee!(
        "10017", "Patrick", "Foo", "1985-08-31", Male, "2016-09-22",
        "patrick.foo@example.com", "+65 3210 9876",
        "404 Sengkang West, #15-555, Singapore 404567",
        "Software Development"
    ),
    employee!(
        "10018", "Nina", "Koh", "1999-11-22", Female, "2021-07-08",
        "nina.koh@example.com", "+65 2109 8765",
        "505 Pasir Ris, #18-666, Singapore 505678",
        "Office Management"
    ),
    employee!(
        "10019", "Alex", "Tay", "1988-05-17", Male, "2020-10-12",
        "alex.tay@example.com", "+65 1098 7654",
        "606 Ang Mo Kio, #21-777, Singapore 606789",
        "Process Improvement"
    ),
    employee!(
        "10020", "Helen", "Gan", "1993-03-03", Female, "2018-05-28",
        "helen.gan@example.com", "+65 9876 5432",
        "707 Jalan Kayu, #24-888, Singapore 707012",
        "Digital Marketing and Social Media"
    ),
    employee!(
        "10021", "Ryan", "Liew", "1991-08-11", Male, "2019-03-18",
        "ryan.liew@example.com", "+65 8765 4321",
        "123 Serangoon Central, #01-234, Singapore 123789",
        "Inventory Management"
    ),
    employee!(
        "10022", "Lily", "Tan", "1986-10-29", Female, "2020-08-22",
        "lily.tan@example.com", "+65 7654 3210",
        "456 Woodlands Street, #05-678, Singapore 456012",
        "Partnership and Alliances"
    ),
    employee!(
        "10023", "Daniel", "Teo", "1997-04-17", Male, "2018-05-28",
        "daniel.teo@example.com", "+65 6543 2109",
        "789 Jurong East Ave, #10-111, Singapore 789345",
        "Partnership and Alliances"
    ),
    employee!(
        "10024", "Catherine", "Ng", "1989-12-05", Female, "2022-02-10",
        "catherine.ng@example.com", "+65 5432 1098",
        "101 Orchard Boulevard, #03-222, Singapore 101678",
        "Facilities and Maintenance"
    ),
    employee!(
        "10025", "Andrew", "Wu", "1994-03-21", Male, "2017-12-15",
        "andrew.wu@example.com", "+65 4321 0987",
        "202 Bukit Panjang, #08-333, Singapore 202901",
        "Process Improvement"
    ),
    employee!(
        "10026", "Olivia", "Chen", "1992-06-19", Female, "2023-06-20",
        "olivia.chen@example.com", "+65 3210 9876",
        "303 Chinatown Street, #12-444, Singapore 303234",
        "Quality Control"
    ),
    employee!(
        "10027", "Benjamin", "Lam", "1987-09-14", Male, "2016-10-02",
        "benjamin.lam@example.com", "+65 2109 8765",
        "404 River Valley, #15-555, Singapore 404567",
        "Employee Relations and Compliance"
    ),
    employee!(
        "10028", "Emma", "Cheong", "2000-02-28", Female, "2021-08-18",
        "emma.cheong@example.com", "+65 1098 7654",
        "505 Little India, #18-666, Singapore 505678",
        "Accounts Payable"
    ),
    employee!(
        "10029", "Victor", "Koh", "1988-07-09", Male, "2020-11-22",
        "victor.koh@example.com", "+65 9876 5432",
        "606 Bishan Street, #21-777, Singapore 606789",
        "Product Innovation"
    ),
    employee!(
        "10030", "Jasmine", "Ooi", "1995-01-15", Female, "2018-04-30",
        "jasmine.ooi@example.com", "+65 8765 4321",
        "707 Telok Blangah, #24-888, Singapore 707012",
        "Process Improvement"
    ),
    employee!(
        "10031", "Derek", "Tan", "1990-04-12", Male, "2019-02-28",
        "derek.tan@example.com", "+65 7654 3210",
        "123 Hougang Ave, #01-234, Singapore 123789",
        "Transportation and Distribution"
    ),
    employee!(
        "10032", "Sophia", "Wong", "1985-11-18", Female, "2020-09-15",
        "sophia.wong@example.com", "+65 6543 2109",
        "456 Upper Thomson Road, #05-678, Singapore 456012",
        "New Market Exploration"
    ),
    employee!(
        "10033", "Leo", "Ng", "1993-08-27", Male, "2018-06-18",
        "leo.ng@example.com", "+65 5432 1098",
        "789 Punggol Drive, #10-111, Singapore 789345",
        "New Market Exploration"
    ),
    employee!(
        "10034", "Alice", "Lim", "1988-02-03", Female, "2022-03-05",
        "alice.lim@example.com", "+65 4321 0987",
        "101 Bukit Merah Lane, #03-222, Singapore 101678",
        "Inventory Management"
    ),
    employee!(
        "10035", "Steven", "Goh", "1996-05-29", Male, "2017-11-30",
        "steven.goh@example.com", "+65 3210 9876",
        "202 Choa Chu Kang Ave, #08-333, Singapore 202901",
        "Facilities and Maintenance"
    ),
    employee!(
        "10036", "Evelyn", "Chin", "1991-12-14", Female, "2023-07-20",
        "evelyn.chin@example.com", "+65 2109 8765",
        "303 Toa Payoh, #12-444, Singapore 303234",
        "Market Research"
    ),
    employee!(
        "10037", "Jack", "Yap", "1986-10-05", Male, "2016-11-02",
        "jack.yap@example.com", "+65 1098 7654",
        "404 Simei Street, #15-555, Singapore 404567",
        "Customer Support"
    ),
    employee!(
        "10038", "Hannah", "Lim", "1998-04-30", Female, "2021-09-18",
        "hannah.lim@example.com", "+65 9876 5432",
        "505 Bukit Timah Road, #18-666, Singapore 505678",
        "Digital Marketing and Social Media"
    ),
    employee!(
        "10039", "Max", "Tan", "1987-07-22", Male, "2020-12-22",
        "max.tan@example.com", "+65 8765 4321",
        "606 MacPherson Road, #21-777, Singapore 606789",
        "Partnership and Alliances"
    ),
    employee!(
        "10040", "Sophie", "Chia", "1992-03-08", Female, "2018-05-02",
        "sophie.chia@example.com", "+65 1098 7654",
        "707 Bukit Batok, #24-888, Singapore 707012",
        "New Market Exploration"
    ),
    employee!(
        "10041", "Chris", "Kwok", "1993-06-14", Male, "2019-03-28",
        "chris.kwok@example.com", "+65 7654 3210",
        "123 Tiong Bahru Road, #01-234, Singapore 123789",
        "Inventory Management"
    ),
    employee!(
        "10042", "Natalie", "Leong", "1988-09-03", Female, "2020-10-15",
        "natalie.leong@example.com", "+65 6543 2109",
        "456 Geylang Road, #05-678, Singapore 456012",
        "Transportation and Distribution"
    ),
    employee!(
        "10043", "Vincent", "Chong", "1997-02-17", Male, "2018-07-28",
        "vincent.chong@example.com", "+65 5432 1098",
        "789 Joo Chiat Road, #10-111, Singapore 789345",
        "Supply Chain Management"
    ),
    employee!(
        "10044", "Grace", "Koh", "1989-12-05", Female, "2022-04-10",
        "grace.koh@example.com", "+65 4321 0987",
        "101 Lavender Street, #03-222, Singapore 101678",
        "Supply Chain Management"
    ),
    employee!(
        "10045", "Raymond", "Wu", "1994-03-21", Male, "2017-12-15",
        "raymond.wu@example.com", "+65 3210 9876",
        "202 Boon Lay Drive, #08-333, Singapore 202901",
        "Production Planning"
    ),
    employee!(
        "10046", "Sylvia", "Tan", "1992-06-19", Female, "2023-08-20",
        "sylvia.tan@example.com", "+65 2109 8765",
        "303 Jalan Besar, #12-444, Singapore 303234",
        "Physical Security"
    ),
    employee!(
        "10047", "Paul", "Ng", "1987-09-14", Male, "2016-12-02",
        "paul.ng@example.com", "+65 1098 7654",
        "404 Kallang Road, #15-555, Singapore 404567",
        "Facilities and Maintenance"
    ),
];
