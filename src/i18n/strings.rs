//! Localized copy for every supported language.
//!
//! Both catalogs fill the same `Catalog` struct, field for field.

use crate::i18n::catalog::*;
use crate::i18n::LanguageCode;

// ==================== Spanish Strings ====================

/// Spanish catalog (default language)
pub static SPANISH: Catalog = Catalog {
    language: LanguageCode::Es,
    header: HeaderText {
        services: "Servicios",
        projects: "Proyectos",
        about: "Nosotros",
        contact: "Contacto",
        start: "Comenzar",
    },
    hero: HeroText {
        tagline: "Soluciones Innovadoras para Empresas Modernas",
        title: HeroTitle {
            part1: "Construimos ",
            highlight: "soluciones digitales",
            part2: " que impulsan el crecimiento",
        },
        description: "NewCode es una agencia de programación especializada en desarrollo de software personalizado, aplicaciones web y transformación digital.",
        services: "Nuestros Servicios",
        contact_us: "Contáctanos",
    },
    services: ServicesText {
        title: "Nuestros Servicios",
        subtitle: "Lo Que Ofrecemos",
        description: "Ofrecemos una amplia gama de servicios de programación y desarrollo para ayudar a tu empresa a prosperar en el mundo digital.",
        learn_more: "Saber más",
        items: ServiceItems {
            web_dev: CardText {
                title: "Desarrollo Web",
                description: "Sitios web y aplicaciones web personalizadas construidas con las últimas tecnologías.",
            },
            mobile_dev: CardText {
                title: "Aplicaciones Móviles",
                description: "Aplicaciones móviles nativas y multiplataforma para iOS y Android.",
            },
            software_dev: CardText {
                title: "Desarrollo de Software",
                description: "Soluciones de software a medida adaptadas a las necesidades de tu empresa.",
            },
            ai_ml: CardText {
                title: "IA & Machine Learning",
                description: "Soluciones inteligentes que aprovechan el poder de la inteligencia artificial.",
            },
            cloud_services: CardText {
                title: "Servicios en la Nube",
                description: "Infraestructura en la nube escalable y soluciones de implementación.",
            },
            consulting: CardText {
                title: "Consultoría",
                description: "Asesoramiento experto sobre estrategia tecnológica e implementación.",
            },
        },
    },
    about: AboutText {
        tagline: "Nuestra Historia",
        title: "Sobre NewCode",
        description1: "Fundada en 2023, NewCode se ha establecido rápidamente como una agencia de programación líder, entregando soluciones innovadoras para empresas de todos los tamaños.",
        description2: "Nuestro equipo de desarrolladores, diseñadores y estrategas expertos trabajan juntos para crear software personalizado que resuelve problemas empresariales reales e impulsa el crecimiento.",
        points: &[
            "Más de 10 años de experiencia combinada",
            "Equipo dedicado de desarrolladores expertos",
            "Metodología de desarrollo ágil",
            "Enfoque en calidad y rendimiento",
            "Soporte y mantenimiento continuo",
        ],
        learn_more: "Conoce Más Sobre Nosotros",
    },
    projects: ProjectsText {
        tagline: "Nuestro Trabajo",
        title: "Proyectos Destacados",
        description: "Echa un vistazo a algunos de nuestros trabajos recientes que muestran nuestra experiencia y capacidades.",
        view_project: "Ver proyecto",
        items: ProjectItems {
            ecommerce: CardText {
                title: "Plataforma de E-commerce",
                description: "Una plataforma de comercio electrónico completa con gestión de inventario y procesamiento de pagos.",
            },
            health_app: CardText {
                title: "App de Salud",
                description: "Una aplicación móvil para proveedores de atención médica para gestionar registros y citas de pacientes.",
            },
            finance_dashboard: CardText {
                title: "Dashboard Financiero",
                description: "Un panel interactivo para visualización y análisis de datos financieros.",
            },
            ai_generator: CardText {
                title: "Generador de Contenido IA",
                description: "Una herramienta impulsada por IA para generar contenido de marketing y publicaciones en redes sociales.",
            },
        },
    },
    contact: ContactText {
        tagline: "Contáctanos",
        title: "Ponte en Contacto",
        description: "¿Listo para comenzar tu próximo proyecto? Contáctanos hoy para una consulta gratuita.",
        form: ContactFormText {
            name: "Nombre",
            email: "Email",
            message: "Mensaje",
            send: "Enviar Mensaje",
            sending: "Enviando...",
            name_placeholder: "Tu nombre",
            email_placeholder: "tu@email.com",
            message_placeholder: "Ingresa tu mensaje",
        },
        validation: ContactValidationText {
            name_required: "El nombre es requerido",
            name_too_short: "El nombre debe tener al menos 2 caracteres",
            email_required: "El email es requerido",
            email_invalid: "Email inválido",
            message_required: "El mensaje es requerido",
            message_too_short: "El mensaje debe tener al menos 10 caracteres",
        },
        notices: ContactNoticeText {
            invalid_title: "Error en el formulario",
            invalid_description: "Por favor, corrige los errores en el formulario.",
            sent_title: "¡Mensaje enviado!",
            sent_description: "Gracias por contactarnos. Te responderemos pronto.",
            failed_title: "Error",
            failed_description: "Hubo un problema al enviar el formulario. Inténtalo de nuevo.",
        },
    },
    footer: FooterText {
        description: "Construyendo soluciones digitales innovadoras para empresas modernas.",
        company: "Empresa",
        services: "Servicios",
        legal: "Legal",
        about: "Nosotros",
        careers: "Carreras",
        blog: "Blog",
        web_dev: "Desarrollo Web",
        mobile_dev: "Aplicaciones Móviles",
        ai_ml: "IA & Machine Learning",
        terms: "Términos",
        privacy: "Privacidad",
        cookies: "Cookies",
        rights: "© 2024 NewCode. Todos los derechos reservados.",
    },
    start_project: StartProjectText {
        step1: LeadStepText {
            title: "Comienza tu proyecto",
            description: "Cuéntanos sobre ti para comenzar tu proyecto con NewCode.",
            name: "Nombre completo",
            email: "Email",
            company: "Empresa",
            company_placeholder: "Nombre de tu empresa",
        },
        step2: DetailsStepText {
            title: "Detalles del proyecto",
            description: "Proporciona algunos detalles sobre el proyecto que tienes en mente.",
            project_type: "Tipo de proyecto",
            budget: "Presupuesto estimado",
            timeline: "Plazo de tiempo",
            project_types: ProjectTypeText {
                select: "Selecciona una opción",
                web: "Desarrollo Web",
                mobile: "Aplicación Móvil",
                software: "Software a Medida",
                ai: "IA & Machine Learning",
                cloud: "Servicios en la Nube",
                consulting: "Consultoría",
            },
            budgets: BudgetText {
                select: "Selecciona una opción",
                small: "Menos de $5,000",
                medium: "$5,000 - $15,000",
                large: "$15,000 - $50,000",
                enterprise: "Más de $50,000",
            },
            timelines: TimelineText {
                select: "Selecciona una opción",
                urgent: "Urgente (menos de 1 mes)",
                short: "Corto plazo (1-3 meses)",
                medium: "Medio plazo (3-6 meses)",
                long: "Largo plazo (más de 6 meses)",
            },
        },
        step3: ConfirmationStepText {
            title: "Solicitud enviada",
            description: "Gracias por tu interés. Nos pondremos en contacto contigo pronto.",
            thank_you: "¡Gracias por tu solicitud!",
            message: "Hemos recibido los detalles de tu proyecto. Un miembro de nuestro equipo se pondrá en contacto contigo en las próximas 24-48 horas para discutir los siguientes pasos.",
            close: "Cerrar",
        },
        buttons: WizardButtonText {
            next: "Siguiente",
            back: "Atrás",
            submit: "Enviar solicitud",
            processing: "Procesando...",
        },
        validation: WizardValidationText {
            required_fields: "Por favor completa todos los campos para continuar.",
            invalid_email: "Por favor ingresa un email válido.",
            submit_failed: "No pudimos enviar tu solicitud. Por favor, inténtalo de nuevo.",
        },
        success: WizardSuccessText {
            title: "¡Solicitud enviada!",
            message: "Hemos recibido tu solicitud. Nos pondremos en contacto contigo pronto.",
        },
    },
};

// ==================== English Strings ====================

/// English catalog
pub static ENGLISH: Catalog = Catalog {
    language: LanguageCode::En,
    header: HeaderText {
        services: "Services",
        projects: "Projects",
        about: "About",
        contact: "Contact",
        start: "Get Started",
    },
    hero: HeroText {
        tagline: "Innovative Solutions for Modern Businesses",
        title: HeroTitle {
            part1: "We build ",
            highlight: "digital solutions",
            part2: " that drive growth",
        },
        description: "NewCode is a programming agency specializing in custom software development, web applications, and digital transformation.",
        services: "Our Services",
        contact_us: "Contact Us",
    },
    services: ServicesText {
        title: "Our Services",
        subtitle: "What We Offer",
        description: "We offer a wide range of programming and development services to help your business thrive in the digital world.",
        learn_more: "Learn more",
        items: ServiceItems {
            web_dev: CardText {
                title: "Web Development",
                description: "Custom websites and web applications built with the latest technologies.",
            },
            mobile_dev: CardText {
                title: "Mobile Applications",
                description: "Native and cross-platform mobile applications for iOS and Android.",
            },
            software_dev: CardText {
                title: "Software Development",
                description: "Custom software solutions tailored to your business needs.",
            },
            ai_ml: CardText {
                title: "AI & Machine Learning",
                description: "Intelligent solutions that leverage the power of artificial intelligence.",
            },
            cloud_services: CardText {
                title: "Cloud Services",
                description: "Scalable cloud infrastructure and deployment solutions.",
            },
            consulting: CardText {
                title: "Consulting",
                description: "Expert advice on technology strategy and implementation.",
            },
        },
    },
    about: AboutText {
        tagline: "Our Story",
        title: "About NewCode",
        description1: "Founded in 2023, NewCode has quickly established itself as a leading programming agency, delivering innovative solutions for businesses of all sizes.",
        description2: "Our team of expert developers, designers, and strategists work together to create custom software that solves real business problems and drives growth.",
        points: &[
            "Over 10 years of combined experience",
            "Dedicated team of expert developers",
            "Agile development methodology",
            "Focus on quality and performance",
            "Continuous support and maintenance",
        ],
        learn_more: "Learn More About Us",
    },
    projects: ProjectsText {
        tagline: "Our Work",
        title: "Featured Projects",
        description: "Take a look at some of our recent work that showcases our expertise and capabilities.",
        view_project: "View project",
        items: ProjectItems {
            ecommerce: CardText {
                title: "E-commerce Platform",
                description: "A complete e-commerce platform with inventory management and payment processing.",
            },
            health_app: CardText {
                title: "Health App",
                description: "A mobile application for healthcare providers to manage patient records and appointments.",
            },
            finance_dashboard: CardText {
                title: "Financial Dashboard",
                description: "An interactive dashboard for financial data visualization and analysis.",
            },
            ai_generator: CardText {
                title: "AI Content Generator",
                description: "An AI-powered tool for generating marketing content and social media posts.",
            },
        },
    },
    contact: ContactText {
        tagline: "Contact Us",
        title: "Get in Touch",
        description: "Ready to start your next project? Contact us today for a free consultation.",
        form: ContactFormText {
            name: "Name",
            email: "Email",
            message: "Message",
            send: "Send Message",
            sending: "Sending...",
            name_placeholder: "Your name",
            email_placeholder: "you@email.com",
            message_placeholder: "Enter your message",
        },
        validation: ContactValidationText {
            name_required: "Name is required",
            name_too_short: "Name must be at least 2 characters",
            email_required: "Email is required",
            email_invalid: "Invalid email",
            message_required: "Message is required",
            message_too_short: "Message must be at least 10 characters",
        },
        notices: ContactNoticeText {
            invalid_title: "Form error",
            invalid_description: "Please fix the errors in the form.",
            sent_title: "Message sent!",
            sent_description: "Thanks for contacting us. We will get back to you soon.",
            failed_title: "Error",
            failed_description: "There was a problem sending the form. Please try again.",
        },
    },
    footer: FooterText {
        description: "Building innovative digital solutions for modern businesses.",
        company: "Company",
        services: "Services",
        legal: "Legal",
        about: "About",
        careers: "Careers",
        blog: "Blog",
        web_dev: "Web Development",
        mobile_dev: "Mobile Applications",
        ai_ml: "AI & Machine Learning",
        terms: "Terms",
        privacy: "Privacy",
        cookies: "Cookies",
        rights: "© 2024 NewCode. All rights reserved.",
    },
    start_project: StartProjectText {
        step1: LeadStepText {
            title: "Start your project",
            description: "Tell us about yourself to start your project with NewCode.",
            name: "Full name",
            email: "Email",
            company: "Company",
            company_placeholder: "Your company name",
        },
        step2: DetailsStepText {
            title: "Project details",
            description: "Provide some details about the project you have in mind.",
            project_type: "Project type",
            budget: "Estimated budget",
            timeline: "Timeline",
            project_types: ProjectTypeText {
                select: "Select an option",
                web: "Web Development",
                mobile: "Mobile Application",
                software: "Custom Software",
                ai: "AI & Machine Learning",
                cloud: "Cloud Services",
                consulting: "Consulting",
            },
            budgets: BudgetText {
                select: "Select an option",
                small: "Less than $5,000",
                medium: "$5,000 - $15,000",
                large: "$15,000 - $50,000",
                enterprise: "More than $50,000",
            },
            timelines: TimelineText {
                select: "Select an option",
                urgent: "Urgent (less than 1 month)",
                short: "Short term (1-3 months)",
                medium: "Medium term (3-6 months)",
                long: "Long term (more than 6 months)",
            },
        },
        step3: ConfirmationStepText {
            title: "Request submitted",
            description: "Thank you for your interest. We will contact you soon.",
            thank_you: "Thank you for your request!",
            message: "We have received your project details. A member of our team will contact you within the next 24-48 hours to discuss next steps.",
            close: "Close",
        },
        buttons: WizardButtonText {
            next: "Next",
            back: "Back",
            submit: "Submit request",
            processing: "Processing...",
        },
        validation: WizardValidationText {
            required_fields: "Please complete all fields to continue.",
            invalid_email: "Please enter a valid email.",
            submit_failed: "We could not submit your request. Please try again.",
        },
        success: WizardSuccessText {
            title: "Request submitted!",
            message: "We have received your request. We will contact you soon.",
        },
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Spanish Strings Tests ====================

    #[test]
    fn test_spanish_header() {
        assert_eq!(SPANISH.header.services, "Servicios");
        assert_eq!(SPANISH.header.start, "Comenzar");
    }

    #[test]
    fn test_spanish_about_points() {
        assert_eq!(SPANISH.about.points.len(), 5);
        assert!(SPANISH.about.points[0].contains("10 años"));
    }

    #[test]
    fn test_spanish_wizard_validation() {
        assert!(SPANISH
            .start_project
            .validation
            .invalid_email
            .contains("email válido"));
    }

    // ==================== English Strings Tests ====================

    #[test]
    fn test_english_header() {
        assert_eq!(ENGLISH.header.services, "Services");
        assert_eq!(ENGLISH.header.start, "Get Started");
    }

    #[test]
    fn test_english_option_labels() {
        assert_eq!(ENGLISH.start_project.step2.budgets.enterprise, "More than $50,000");
        assert_eq!(ENGLISH.start_project.step2.timelines.urgent, "Urgent (less than 1 month)");
    }

    // ==================== Shared Copy Tests ====================

    #[test]
    fn test_select_placeholders_match_within_language() {
        for catalog in [&SPANISH, &ENGLISH] {
            let step2 = catalog.start_project.step2;
            assert_eq!(step2.project_types.select, step2.budgets.select);
            assert_eq!(step2.budgets.select, step2.timelines.select);
        }
    }

    #[test]
    fn test_rights_mention_brand() {
        assert!(SPANISH.footer.rights.contains("NewCode"));
        assert!(ENGLISH.footer.rights.contains("NewCode"));
    }
}
