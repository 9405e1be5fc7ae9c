/// Clave de localStorage del token de autenticación
pub const AUTH_STORAGE_KEY: &str = "hr_auth";

/// Nombre de la cookie que espera el backend
pub const AUTH_COOKIE_NAME: &str = "hr_auth";

/// Código de error del backend para cuentas pendientes de aprobación
pub const PENDING_APPROVAL_CODE: &str = "pending_approval";

// Paginación
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Opciones de nivel de inglés (valor, etiqueta)
pub const ENGLISH_LEVELS: &[(&str, &str)] = &[
    ("", "所有"),
    ("none", "无"),
    ("basic", "基础"),
    ("working", "工作"),
    ("fluent", "流利"),
];

/// Skills del filtro ("" = todas)
pub const SKILLS: &[&str] = &[
    "",
    "Java",
    "Python",
    "Go",
    "Rust",
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Solidity",
    "Web3",
];

/// Etiquetas de acciones del log de auditoría
pub const AUDIT_ACTION_LABELS: &[(&str, &str)] = &[
    ("candidate.list", "浏览候选人列表"),
    ("candidate.view", "查看候选人详情"),
    ("candidate.unlock", "解锁候选人联系方式"),
    ("company.create", "创建公司"),
    ("user.login", "用户登录"),
];
