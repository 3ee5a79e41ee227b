use super::{dispatch, document_topic, sample, without_extension, Rule};
use model::wire::ViewerPages;

struct Document {
    title: &'static str,
    pages: &'static [&'static str],
}

const UPLOAD_RULES: &[Rule<Document>] = &[
    Rule {
        keywords: &["train", "booking", "system"],
        payload: Document {
            title: "Train Seat Booking System",
            pages: &[
                "Train Seat Booking System Documentation\n\nPage 1: System Overview\n\nThis document covers the design and implementation of a comprehensive train seat booking system.\n\nKey Components:\n• User Authentication and Management\n• Train Schedule and Route Management\n• Seat Availability and Reservation System\n• Payment Processing and Ticket Generation\n• Admin Panel for System Management\n\nSystem Architecture:\nThe system follows a three-tier architecture with frontend, backend, and database layers.",
                "Page 2: Database Design\n\nDatabase Schema:\n• Users Table: Stores user information and authentication data\n• Trains Table: Contains train details, schedules, and routes\n• Seats Table: Manages seat availability and reservations\n• Bookings Table: Tracks reservation details and payment status\n• Payments Table: Records transaction information\n\nKey Relationships:\n• One-to-many relationship between trains and seats\n• Many-to-many relationship between users and bookings\n• Foreign key constraints ensure data integrity",
                "Page 3: Technical Implementation\n\nFrontend Technologies:\n• React.js for user interface\n• Bootstrap for responsive design\n• JavaScript for client-side logic\n\nBackend Technologies:\n• Node.js with Express framework\n• RESTful API design\n• JWT for authentication\n• Bcrypt for password hashing\n\nDatabase:\n• MySQL for data persistence\n• Connection pooling for performance\n• Indexed queries for fast retrieval\n\nSecurity Features:\n• Input validation and sanitization\n• SQL injection prevention\n• XSS protection\n• Rate limiting for API endpoints",
            ],
        },
    },
    Rule {
        keywords: &["physics", "motion", "energy"],
        payload: Document {
            title: "Physics Concepts",
            pages: &[
                "Physics Fundamentals\n\nPage 1: Mechanics\n\nMotion in One Dimension:\n• Position, displacement, velocity, and acceleration\n• Equations of motion for constant acceleration\n• Graphical analysis of motion\n\nMotion in Two Dimensions:\n• Projectile motion\n• Circular motion\n• Relative motion\n\nNewton's Laws:\n• First Law: Law of Inertia\n• Second Law: F = ma\n• Third Law: Action-Reaction pairs",
                "Page 2: Energy and Work\n\nWork and Energy:\n• Work done by constant and variable forces\n• Kinetic energy and work-energy theorem\n• Potential energy (gravitational and elastic)\n• Conservation of mechanical energy\n\nPower:\n• Average and instantaneous power\n• Power in rotational motion\n• Efficiency calculations\n\nMomentum:\n• Linear momentum and impulse\n• Conservation of momentum\n• Collisions (elastic and inelastic)",
                "Page 3: Advanced Topics\n\nThermodynamics:\n• Heat, temperature, and thermal expansion\n• Laws of thermodynamics\n• Heat engines and refrigerators\n\nElectromagnetism:\n• Electric fields and forces\n• Magnetic fields and forces\n• Electromagnetic induction\n• AC and DC circuits\n\nModern Physics:\n• Quantum mechanics basics\n• Relativity theory\n• Nuclear physics fundamentals",
            ],
        },
    },
];

fn generic_pages(pdf_name: &str) -> ViewerPages {
    let title = without_extension(pdf_name);
    let topic = document_topic(pdf_name);
    let introduction = format!(
        "{title}\n\nPage 1: Introduction\n\nThis document covers comprehensive information about {topic}.\n\nOverview:\n• Fundamental concepts and principles\n• Theoretical foundations\n• Practical applications\n• Implementation strategies\n\nKey Topics:\n• Core concepts and definitions\n• Problem-solving methodologies\n• Case studies and examples\n• Best practices and guidelines"
    );
    ViewerPages {
        title: String::from(title),
        pages: Vec::from([
            introduction,
            String::from("Page 2: Detailed Analysis\n\nAdvanced Concepts:\n• In-depth exploration of key topics\n• Mathematical formulations and derivations\n• Theoretical frameworks\n• Practical implementations\n\nApplications:\n• Real-world use cases\n• Industry applications\n• Problem-solving scenarios\n• Performance considerations\n\nMethodologies:\n• Systematic approaches\n• Step-by-step procedures\n• Quality assurance measures\n• Optimization techniques"),
            String::from("Page 3: Implementation and Results\n\nImplementation Details:\n• Technical specifications\n• System requirements\n• Configuration parameters\n• Integration guidelines\n\nResults and Analysis:\n• Performance metrics\n• Comparative analysis\n• Success factors\n• Lessons learned\n\nFuture Directions:\n• Potential improvements\n• Emerging trends\n• Research opportunities\n• Development roadmap"),
        ]),
    }
}

fn collect(title: &str, pages: &[&str]) -> ViewerPages {
    ViewerPages { title: String::from(title), pages: pages.iter().copied().map(String::from).collect() }
}

/// Renders the mock pages of a document.
pub fn pages(pdf_name: &str, is_uploaded: bool) -> ViewerPages {
    if is_uploaded {
        let lower = pdf_name.to_lowercase();
        return match dispatch(UPLOAD_RULES, &lower) {
            Some(Document { title, pages }) => collect(title, pages),
            None => generic_pages(pdf_name),
        };
    }

    match sample::find(pdf_name) {
        Some(sample) => collect(sample.title, sample.pages),
        None => ViewerPages {
            title: String::from(pdf_name),
            pages: Vec::from([format!(
                "Content for {pdf_name}\n\nThis is a demo PDF viewer showing content based on the selected PDF.\n\nIn a real implementation, this would display the actual PDF content from the uploaded file.\n\nYou can proceed with quiz generation and other features using this content."
            )]),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::pages;

    #[test]
    fn renders_uploaded_documents_by_keyword() {
        let doc = pages("Railway booking.pdf", true);
        assert_eq!(doc.title, "Train Seat Booking System");
        assert_eq!(doc.pages.len(), 3);

        let doc = pages("KINETIC ENERGY.pdf", true);
        assert_eq!(doc.title, "Physics Concepts");

        let doc = pages("Roman Law.pdf", true);
        assert_eq!(doc.title, "Roman Law");
        assert!(doc.pages[0].starts_with("Roman Law\n\nPage 1: Introduction"));
        assert_eq!(doc.pages.len(), 3);
    }

    #[test]
    fn renders_samples_and_placeholders() {
        let doc = pages("Physics Part 1 - Motion in a Straight Line", false);
        assert_eq!(doc.title, "Motion in a Straight Line");
        assert!(doc.pages[2].starts_with("Acceleration"));

        let doc = pages("Unknown", false);
        assert_eq!(doc.title, "Unknown");
        assert_eq!(doc.pages.len(), 1);
    }
}
