//! # Static Contractor Dataset
//!
//! Demo and fallback listings shown when the directory API is unreachable.
//! Grouped by state in display order; the first appearance of a city within a
//! state determines its position in [`crate::contractors::cities_by_state`].

use crate::contractors::{Badge, Contractor, CustomerReview, PriceTier, ServiceHours, Specialty};

/// States that have at least one contractor in [`CONTRACTORS`].
pub static STATES: &[&str] = &[
    "California",
    "New York",
    "Texas",
    "Florida",
    "Illinois",
    "Pennsylvania",
    "Arizona",
    "Georgia",
];

/// Every contractor in the static dataset.
pub static CONTRACTORS: &[Contractor] = &[
    // California
    Contractor {
        id: "j-sewer-and-drain",
        name: "J Sewer & Drain Plumbing",
        city: "Los Angeles",
        state: "California",
        address: "1234 Main St, Los Angeles, CA 90001",
        rating: 4.9,
        reviews: 156,
        specialty: Specialty::Both,
        price: PriceTier::Premium,
        phone: "(213) 555-0101",
        badge: Badge::Premium,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "7:00 AM - 6:00 PM" },
            ServiceHours { day: "Saturday", hours: "8:00 AM - 4:00 PM" },
            ServiceHours { day: "Sunday", hours: "Emergency Only" },
        ],
        photos: &[
            "/sewer-repair-truck.jpg",
            "/drain-cleaning-equipment.jpg",
            "/plumbing-team.png",
        ],
        certifications: &[
            "Licensed Plumber",
            "Bonded & Insured",
            "EPA Certified",
            "OSHA Certified",
        ],
        customer_reviews: &[
            CustomerReview {
                author: "John D.",
                rating: 5,
                text: "Excellent service! Fixed our sewer line issue quickly and professionally. Highly recommend!",
                date: "2024-10-15",
            },
            CustomerReview {
                author: "Sarah M.",
                rating: 5,
                text: "Very professional and affordable. Great customer service from start to finish.",
                date: "2024-10-10",
            },
            CustomerReview {
                author: "Mike K.",
                rating: 4,
                text: "Good work, arrived on time. Would use again.",
                date: "2024-09-28",
            },
        ],
    },
    Contractor {
        id: "expert-sewer-solutions",
        name: "Expert Sewer Solutions",
        city: "Los Angeles",
        state: "California",
        address: "5678 Broadway Ave, Los Angeles, CA 90005",
        rating: 4.8,
        reviews: 124,
        specialty: Specialty::Residential,
        price: PriceTier::Premium,
        phone: "(213) 555-0102",
        badge: Badge::Premium,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "6:00 AM - 8:00 PM" },
            ServiceHours { day: "Saturday", hours: "7:00 AM - 5:00 PM" },
            ServiceHours { day: "Sunday", hours: "By Appointment" },
        ],
        photos: &["/professional-drain-service.jpg", "/sewer-line-inspection.jpg"],
        certifications: &["Master Plumber", "Bonded & Insured", "Water Quality Certified"],
        customer_reviews: &[
            CustomerReview {
                author: "Lisa R.",
                rating: 5,
                text: "Outstanding service! The team was punctual and courteous.",
                date: "2024-10-12",
            },
            CustomerReview {
                author: "Robert T.",
                rating: 4,
                text: "Professional and efficient. Fair pricing.",
                date: "2024-10-01",
            },
        ],
    },
    Contractor {
        id: "quickfix-plumbing",
        name: "QuickFix Plumbing",
        city: "San Francisco",
        state: "California",
        address: "910 Market St, San Francisco, CA 94102",
        rating: 4.6,
        reviews: 89,
        specialty: Specialty::Residential,
        price: PriceTier::Standard,
        phone: "(415) 555-0103",
        badge: Badge::Verified,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "8:00 AM - 5:00 PM" },
            ServiceHours { day: "Saturday", hours: "9:00 AM - 3:00 PM" },
            ServiceHours { day: "Sunday", hours: "Closed" },
        ],
        photos: &["/residential-plumbing.jpg"],
        certifications: &["Licensed Plumber", "Insured"],
        customer_reviews: &[
            CustomerReview {
                author: "Emma W.",
                rating: 5,
                text: "Fast and reliable service!",
                date: "2024-10-08",
            },
        ],
    },
    Contractor {
        id: "pro-drain-sf",
        name: "Professional Drain & Sewer",
        city: "San Francisco",
        state: "California",
        address: "2030 Mission St, San Francisco, CA 94110",
        rating: 4.7,
        reviews: 112,
        specialty: Specialty::Commercial,
        price: PriceTier::Premium,
        phone: "(415) 555-0104",
        badge: Badge::Premium,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "7:00 AM - 7:00 PM" },
            ServiceHours { day: "Saturday", hours: "8:00 AM - 5:00 PM" },
            ServiceHours { day: "Sunday", hours: "Emergency Only" },
        ],
        photos: &["/commercial-drain-service.jpg"],
        certifications: &["Licensed Plumber", "Bonded & Insured", "Commercial Specialist"],
        customer_reviews: &[
            CustomerReview {
                author: "Alex P.",
                rating: 5,
                text: "Best commercial plumbing service in SF!",
                date: "2024-10-05",
            },
        ],
    },
    Contractor {
        id: "rapid-response-san-diego",
        name: "Rapid Response Sewer Co",
        city: "San Diego",
        state: "California",
        address: "3456 Park Blvd, San Diego, CA 92103",
        rating: 4.4,
        reviews: 45,
        specialty: Specialty::Residential,
        price: PriceTier::Standard,
        phone: "(619) 555-0105",
        badge: Badge::Verified,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Saturday", hours: "8:00 AM - 6:00 PM" },
            ServiceHours { day: "Sunday", hours: "10:00 AM - 4:00 PM" },
        ],
        photos: &["/rapid-response-plumbing.jpg"],
        certifications: &["Licensed Plumber", "Insured"],
        customer_reviews: &[
            CustomerReview {
                author: "Chris L.",
                rating: 4,
                text: "Good response time, professional work.",
                date: "2024-09-20",
            },
        ],
    },
    // New York
    Contractor {
        id: "nyc-sewer-masters",
        name: "NYC Sewer Masters",
        city: "New York",
        state: "New York",
        address: "123 5th Ave, New York, NY 10003",
        rating: 4.8,
        reviews: 198,
        specialty: Specialty::Both,
        price: PriceTier::Premium,
        phone: "(212) 555-0106",
        badge: Badge::Premium,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "7:00 AM - 9:00 PM" },
            ServiceHours { day: "Saturday", hours: "8:00 AM - 6:00 PM" },
            ServiceHours { day: "Sunday", hours: "Emergency 24/7" },
        ],
        photos: &["/nyc-sewer-masters-team.jpg", "/professional-drain-cleaning.png"],
        certifications: &[
            "Master Plumber",
            "Bonded & Insured",
            "NYC Licensed",
            "Emergency Certified",
        ],
        customer_reviews: &[
            CustomerReview {
                author: "David S.",
                rating: 5,
                text: "NYC's best! Fast, professional, and fair pricing.",
                date: "2024-10-18",
            },
            CustomerReview {
                author: "Maria G.",
                rating: 5,
                text: "Solved our sewer problem in one visit. Excellent!",
                date: "2024-10-10",
            },
        ],
    },
    Contractor {
        id: "brooklyn-drain-experts",
        name: "Brooklyn Drain Experts",
        city: "Brooklyn",
        state: "New York",
        address: "456 Atlantic Ave, Brooklyn, NY 11217",
        rating: 4.5,
        reviews: 67,
        specialty: Specialty::Residential,
        price: PriceTier::Standard,
        phone: "(718) 555-0107",
        badge: Badge::Verified,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "8:00 AM - 6:00 PM" },
            ServiceHours { day: "Saturday", hours: "9:00 AM - 4:00 PM" },
            ServiceHours { day: "Sunday", hours: "Closed" },
        ],
        photos: &["/brooklyn-plumbing-service.jpg"],
        certifications: &["Licensed Plumber", "Bonded"],
        customer_reviews: &[
            CustomerReview {
                author: "Jennifer H.",
                rating: 4,
                text: "Good service, reasonable prices.",
                date: "2024-09-25",
            },
        ],
    },
    Contractor {
        id: "advanced-pipe-systems",
        name: "Advanced Pipe Systems",
        city: "Buffalo",
        state: "New York",
        address: "789 Main St, Buffalo, NY 14202",
        rating: 4.7,
        reviews: 102,
        specialty: Specialty::Commercial,
        price: PriceTier::Premium,
        phone: "(716) 555-0108",
        badge: Badge::Premium,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "7:00 AM - 6:00 PM" },
            ServiceHours { day: "Saturday - Sunday", hours: "By Appointment" },
        ],
        photos: &["/commercial-pipe-systems.jpg"],
        certifications: &[
            "Commercial Plumbing Specialist",
            "Bonded & Insured",
            "Advanced Systems Certified",
        ],
        customer_reviews: &[
            CustomerReview {
                author: "Paul N.",
                rating: 5,
                text: "Top-notch commercial plumbing services!",
                date: "2024-10-02",
            },
        ],
    },
    // Texas
    Contractor {
        id: "houston-sewer-service",
        name: "Houston Sewer Service",
        city: "Houston",
        state: "Texas",
        address: "234 Main St, Houston, TX 77002",
        rating: 4.6,
        reviews: 143,
        specialty: Specialty::Both,
        price: PriceTier::Standard,
        phone: "(713) 555-0109",
        badge: Badge::Premium,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "7:00 AM - 7:00 PM" },
            ServiceHours { day: "Saturday", hours: "8:00 AM - 5:00 PM" },
            ServiceHours { day: "Sunday", hours: "Emergency Only" },
        ],
        photos: &["/houston-sewer-service.jpg"],
        certifications: &["Licensed Plumber", "Bonded & Insured", "Texas Certified"],
        customer_reviews: &[
            CustomerReview {
                author: "Tom B.",
                rating: 5,
                text: "Excellent service, fast response!",
                date: "2024-10-14",
            },
        ],
    },
    Contractor {
        id: "dallas-drain-solutions",
        name: "Dallas Drain Solutions",
        city: "Dallas",
        state: "Texas",
        address: "567 Commerce St, Dallas, TX 75202",
        rating: 4.9,
        reviews: 175,
        specialty: Specialty::Both,
        price: PriceTier::Premium,
        phone: "(214) 555-0110",
        badge: Badge::Premium,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "6:00 AM - 8:00 PM" },
            ServiceHours { day: "Saturday", hours: "7:00 AM - 6:00 PM" },
            ServiceHours { day: "Sunday", hours: "Emergency 24/7" },
        ],
        photos: &["/dallas-drain-solutions.jpg"],
        certifications: &["Master Plumber", "Bonded & Insured", "EPA Certified"],
        customer_reviews: &[
            CustomerReview {
                author: "Rachel C.",
                rating: 5,
                text: "Best drain service in Dallas!",
                date: "2024-10-16",
            },
        ],
    },
    Contractor {
        id: "austin-pipe-repair",
        name: "Austin Pipe Repair",
        city: "Austin",
        state: "Texas",
        address: "890 Congress Ave, Austin, TX 78701",
        rating: 4.3,
        reviews: 38,
        specialty: Specialty::Residential,
        price: PriceTier::Budget,
        phone: "(512) 555-0111",
        badge: Badge::Verified,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "9:00 AM - 5:00 PM" },
            ServiceHours { day: "Saturday", hours: "10:00 AM - 3:00 PM" },
            ServiceHours { day: "Sunday", hours: "Closed" },
        ],
        photos: &["/austin-pipe-repair.jpg"],
        certifications: &["Licensed Plumber", "Insured"],
        customer_reviews: &[
            CustomerReview {
                author: "Kevin M.",
                rating: 4,
                text: "Affordable and reliable!",
                date: "2024-09-30",
            },
        ],
    },
    // Florida
    Contractor {
        id: "miami-drain-pros",
        name: "Miami Drain Pros",
        city: "Miami",
        state: "Florida",
        address: "111 Biscayne Blvd, Miami, FL 33132",
        rating: 4.7,
        reviews: 95,
        specialty: Specialty::Both,
        price: PriceTier::Standard,
        phone: "(305) 555-0112",
        badge: Badge::Premium,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Saturday", hours: "7:00 AM - 8:00 PM" },
            ServiceHours { day: "Sunday", hours: "9:00 AM - 5:00 PM" },
        ],
        photos: &["/miami-drain-service.jpg"],
        certifications: &["Licensed Plumber", "Bonded & Insured", "Florida Certified"],
        customer_reviews: &[
            CustomerReview {
                author: "Angela F.",
                rating: 5,
                text: "Fantastic service, highly recommended!",
                date: "2024-10-11",
            },
        ],
    },
    Contractor {
        id: "orlando-sewer-repair",
        name: "Orlando Sewer Repair",
        city: "Orlando",
        state: "Florida",
        address: "222 Orange Ave, Orlando, FL 32801",
        rating: 4.5,
        reviews: 68,
        specialty: Specialty::Residential,
        price: PriceTier::Standard,
        phone: "(407) 555-0113",
        badge: Badge::Verified,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "8:00 AM - 6:00 PM" },
            ServiceHours { day: "Saturday - Sunday", hours: "By Appointment" },
        ],
        photos: &["/orlando-sewer-repair.jpg"],
        certifications: &["Licensed Plumber", "Bonded"],
        customer_reviews: &[
            CustomerReview {
                author: "Susan V.",
                rating: 4,
                text: "Professional and courteous!",
                date: "2024-10-03",
            },
        ],
    },
    // Illinois
    Contractor {
        id: "chicago-pipe-masters",
        name: "Chicago Pipe Masters",
        city: "Chicago",
        state: "Illinois",
        address: "333 State St, Chicago, IL 60602",
        rating: 4.8,
        reviews: 187,
        specialty: Specialty::Both,
        price: PriceTier::Premium,
        phone: "(312) 555-0114",
        badge: Badge::Premium,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "7:00 AM - 8:00 PM" },
            ServiceHours { day: "Saturday", hours: "8:00 AM - 6:00 PM" },
            ServiceHours { day: "Sunday", hours: "Emergency Only" },
        ],
        photos: &["/placeholder.svg?height=300&width=400"],
        certifications: &["Master Plumber", "Bonded & Insured", "Chicago Licensed"],
        customer_reviews: &[
            CustomerReview {
                author: "Mark J.",
                rating: 5,
                text: "Top Chicago plumbing service!",
                date: "2024-10-19",
            },
        ],
    },
    Contractor {
        id: "chicago-drain-solutions",
        name: "Chicago Drain Solutions",
        city: "Chicago",
        state: "Illinois",
        address: "444 Michigan Ave, Chicago, IL 60611",
        rating: 4.6,
        reviews: 74,
        specialty: Specialty::Commercial,
        price: PriceTier::Premium,
        phone: "(312) 555-0115",
        badge: Badge::Verified,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "7:00 AM - 6:00 PM" },
            ServiceHours { day: "Saturday - Sunday", hours: "By Appointment" },
        ],
        photos: &["/placeholder.svg?height=300&width=400"],
        certifications: &["Commercial Plumbing", "Bonded & Insured"],
        customer_reviews: &[
            CustomerReview {
                author: "Patricia O.",
                rating: 5,
                text: "Great commercial plumbing solutions!",
                date: "2024-10-07",
            },
        ],
    },
    // Pennsylvania
    Contractor {
        id: "philly-sewer-service",
        name: "Philadelphia Sewer Service",
        city: "Philadelphia",
        state: "Pennsylvania",
        address: "555 Market St, Philadelphia, PA 19106",
        rating: 4.9,
        reviews: 156,
        specialty: Specialty::Both,
        price: PriceTier::Premium,
        phone: "(215) 555-0116",
        badge: Badge::Premium,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "7:00 AM - 7:00 PM" },
            ServiceHours { day: "Saturday", hours: "8:00 AM - 5:00 PM" },
            ServiceHours { day: "Sunday", hours: "Emergency Only" },
        ],
        photos: &["/placeholder.svg?height=300&width=400"],
        certifications: &["Master Plumber", "Bonded & Insured", "Philadelphia Licensed"],
        customer_reviews: &[
            CustomerReview {
                author: "James B.",
                rating: 5,
                text: "Excellent service in Philadelphia!",
                date: "2024-10-13",
            },
        ],
    },
    Contractor {
        id: "pittsburgh-drain-experts",
        name: "Pittsburgh Drain Experts",
        city: "Pittsburgh",
        state: "Pennsylvania",
        address: "666 Fifth Ave, Pittsburgh, PA 15219",
        rating: 4.4,
        reviews: 52,
        specialty: Specialty::Residential,
        price: PriceTier::Standard,
        phone: "(412) 555-0117",
        badge: Badge::Verified,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "8:00 AM - 6:00 PM" },
            ServiceHours { day: "Saturday", hours: "9:00 AM - 4:00 PM" },
            ServiceHours { day: "Sunday", hours: "Closed" },
        ],
        photos: &["/placeholder.svg?height=300&width=400"],
        certifications: &["Licensed Plumber", "Insured"],
        customer_reviews: &[
            CustomerReview {
                author: "Lisa A.",
                rating: 4,
                text: "Good work and fair prices!",
                date: "2024-09-22",
            },
        ],
    },
    // Arizona
    Contractor {
        id: "phoenix-sewer-pro",
        name: "Phoenix Sewer Pro",
        city: "Phoenix",
        state: "Arizona",
        address: "777 Central Ave, Phoenix, AZ 85004",
        rating: 4.7,
        reviews: 118,
        specialty: Specialty::Both,
        price: PriceTier::Standard,
        phone: "(602) 555-0118",
        badge: Badge::Premium,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Saturday", hours: "7:00 AM - 6:00 PM" },
            ServiceHours { day: "Sunday", hours: "9:00 AM - 4:00 PM" },
        ],
        photos: &["/placeholder.svg?height=300&width=400"],
        certifications: &["Licensed Plumber", "Bonded & Insured", "Arizona Certified"],
        customer_reviews: &[
            CustomerReview {
                author: "Daniel E.",
                rating: 5,
                text: "Best plumber in Phoenix!",
                date: "2024-10-17",
            },
        ],
    },
    // Georgia
    Contractor {
        id: "atlanta-drain-masters",
        name: "Atlanta Drain Masters",
        city: "Atlanta",
        state: "Georgia",
        address: "888 Peach St, Atlanta, GA 30303",
        rating: 4.6,
        reviews: 94,
        specialty: Specialty::Both,
        price: PriceTier::Standard,
        phone: "(404) 555-0119",
        badge: Badge::Verified,
        email: None,
        website: None,
        service_hours: &[
            ServiceHours { day: "Monday - Friday", hours: "8:00 AM - 6:00 PM" },
            ServiceHours { day: "Saturday", hours: "9:00 AM - 3:00 PM" },
            ServiceHours { day: "Sunday", hours: "Closed" },
        ],
        photos: &["/placeholder.svg?height=300&width=400"],
        certifications: &["Licensed Plumber", "Bonded & Insured", "Georgia Certified"],
        customer_reviews: &[
            CustomerReview {
                author: "Nicole T.",
                rating: 5,
                text: "Fantastic Atlanta drain service!",
                date: "2024-10-09",
            },
        ],
    },
];
