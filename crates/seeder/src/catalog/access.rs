//! Roles, permissions and which role gets what.

use crate::{GrantRule, PermissionModule, PermissionSeed, RoleGrant, RoleSeed};

pub const ROLES: &[RoleSeed] = &[
    RoleSeed {
        name: "super-admin",
        display_name: "Super Admin",
        description: Some("Quản trị viên cấp cao - có toàn quyền truy cập"),
    },
    RoleSeed {
        name: "admin",
        display_name: "Admin",
        description: Some("Quản trị viên - quản lý hệ thống"),
    },
    RoleSeed {
        name: "manager",
        display_name: "Manager",
        description: Some("Quản lý - quản lý sản phẩm và đơn hàng"),
    },
    RoleSeed {
        name: "staff",
        display_name: "Staff",
        description: Some("Nhân viên - xử lý đơn hàng"),
    },
    RoleSeed {
        name: "user",
        display_name: "User",
        description: Some("Người dùng - quyền cơ bản"),
    },
    RoleSeed {
        name: "parent",
        display_name: "Parent",
        description: Some("Phụ huynh - xem kết quả học tập của con"),
    },
    RoleSeed {
        name: "student",
        display_name: "Student",
        description: Some("Học viên - truy cập lớp học và nội dung học tập"),
    },
    RoleSeed {
        name: "teacher",
        display_name: "Teacher",
        description: Some("Giáo viên - quyền cơ bản cho giáo viên"),
    },
];

pub const MODULES: &[PermissionModule] = &[
    PermissionModule {
        module: "users",
        actions: &[
            ("view", "Xem danh sách người dùng", 1),
            ("create", "Tạo người dùng mới", 2),
            ("edit", "Chỉnh sửa người dùng", 3),
            ("delete", "Xóa người dùng", 4),
            ("assign-role", "Gán vai trò cho người dùng", 5),
        ],
    },
    PermissionModule {
        module: "roles",
        actions: &[
            ("view", "Xem danh sách vai trò", 1),
            ("create", "Tạo vai trò mới", 2),
            ("edit", "Chỉnh sửa vai trò", 3),
            ("delete", "Xóa vai trò", 4),
            ("assign-permission", "Gán quyền cho vai trò", 5),
        ],
    },
    PermissionModule {
        module: "products",
        actions: &[
            ("view", "Xem danh sách sản phẩm", 1),
            ("create", "Tạo sản phẩm mới", 2),
            ("edit", "Chỉnh sửa sản phẩm", 3),
            ("delete", "Xóa sản phẩm", 4),
        ],
    },
    PermissionModule {
        module: "orders",
        actions: &[
            ("view", "Xem danh sách đơn hàng", 1),
            ("create", "Tạo đơn hàng mới", 2),
            ("edit", "Chỉnh sửa đơn hàng", 3),
            ("delete", "Xóa đơn hàng", 4),
            ("approve", "Duyệt đơn hàng", 5),
        ],
    },
    PermissionModule {
        module: "reports",
        actions: &[("view", "Xem báo cáo", 1), ("export", "Xuất báo cáo", 2)],
    },
    PermissionModule {
        module: "branches",
        actions: &[
            ("view", "Xem Chi Nhánh", 1),
            ("create", "Tạo Chi Nhánh", 2),
            ("edit", "Sửa Chi Nhánh", 3),
            ("delete", "Xóa Chi Nhánh", 4),
        ],
    },
    PermissionModule {
        module: "classes",
        actions: &[
            ("view", "Xem Lớp học", 1),
            ("create", "Tạo Lớp học", 2),
            ("edit", "Sửa Lớp học", 3),
            ("delete", "Xóa Lớp học", 4),
            ("manage_settings", "Quản lý Thiết lập Lớp học", 5),
        ],
    },
];

/// Accounting permissions share the `accounting` module but are named per screen.
const ACCOUNTING: &[(&str, &str, &str, &str, i32)] = &[
    ("accounting.view", "view", "Xem Kế toán", "Xem module Kế toán", 1),
    ("accounting.manage", "manage", "Quản lý Kế toán", "Quản lý toàn bộ module Kế toán", 2),
    ("account_categories.view", "view", "Xem Danh mục", "Xem danh sách danh mục", 5),
    ("account_categories.create", "create", "Tạo Danh mục", "Tạo danh mục mới", 6),
    ("account_categories.edit", "edit", "Sửa Danh mục", "Chỉnh sửa danh mục", 7),
    ("account_categories.delete", "delete", "Xóa Danh mục", "Xóa danh mục", 8),
    ("account_items.view", "view", "Xem Khoản mục", "Xem danh sách khoản mục", 10),
    ("account_items.create", "create", "Tạo Định khoản", "Tạo định khoản mới", 11),
];

/// HR screens: `(module, action, display name, sort order)`.
const HR: &[(&str, &str, &str, i32)] = &[
    ("hr", "view", "Xem module HR", 1),
    ("hr", "manage", "Quản lý HR", 2),
    ("org_chart", "view", "Xem sơ đồ tổ chức", 3),
    ("org_chart", "edit", "Chỉnh sửa sơ đồ tổ chức", 4),
    ("departments", "view", "Xem phòng ban", 5),
    ("departments", "create", "Tạo phòng ban", 6),
    ("departments", "edit", "Sửa phòng ban", 7),
    ("departments", "delete", "Xóa phòng ban", 8),
    ("employees", "view", "Xem danh sách nhân viên", 9),
    ("employees", "invite", "Mời nhân viên", 10),
    ("employees", "manage", "Quản lý nhân viên", 11),
    ("employees", "assign", "Phân công nhân viên", 12),
    ("invitations", "view", "Xem lời mời", 13),
    ("invitations", "send", "Gửi lời mời", 14),
    ("invitations", "cancel", "Hủy lời mời", 15),
];

/// Subject management lives in the `quality` module.
const SUBJECTS: &[(&str, &str, &str, &str, i32)] = &[
    ("subjects.view", "view", "Xem Danh sách Môn học", "Xem danh sách môn học", 10),
    ("subjects.create", "create", "Thêm Môn học", "Tạo môn học mới", 11),
    ("subjects.edit", "edit", "Sửa Môn học", "Chỉnh sửa thông tin môn học", 12),
    ("subjects.delete", "delete", "Xóa Môn học", "Xóa môn học", 13),
    (
        "subjects.assign_teachers",
        "assign",
        "Gán Giáo viên vào Môn học",
        "Gán và quản lý giáo viên cho môn học",
        14,
    ),
];

fn named(
    module: &'static str,
    rows: &'static [(&str, &str, &str, &str, i32)],
) -> impl Iterator<Item = PermissionSeed> {
    rows.iter()
        .map(move |(name, action, display_name, description, sort_order)| {
            PermissionSeed::new(module, action, display_name)
                .named(name)
                .description(description)
                .sort_order(*sort_order)
        })
}

/// Every permission: module tables, HR, the accounting screens, subjects and
/// attendance.
pub fn permissions() -> Vec<PermissionSeed> {
    let mut permissions = PermissionSeed::from_modules(MODULES);
    permissions.extend(HR.iter().map(|(module, action, display_name, sort_order)| {
        PermissionSeed::new(module, action, display_name)
            .description(display_name)
            .sort_order(*sort_order)
    }));
    permissions.extend(named("accounting", ACCOUNTING));
    permissions.extend(named("quality", SUBJECTS));
    permissions.push(
        PermissionSeed::new("quality", "quick_attendance", "Điểm danh nhanh")
            .named("attendance.quick_mark")
            .description("Điểm danh nhanh cho buổi học")
            .sort_order(1),
    );
    permissions
}

pub const GRANTS: &[RoleGrant] = &[
    RoleGrant {
        role: "super-admin",
        rules: &[GrantRule::All],
    },
    RoleGrant {
        role: "admin",
        rules: &[GrantRule::AllExceptModules(&["roles"])],
    },
    RoleGrant {
        role: "manager",
        rules: &[
            GrantRule::Modules(&["products", "orders", "reports"]),
            GrantRule::Names(&["branches.view"]),
        ],
    },
    RoleGrant {
        role: "staff",
        rules: &[GrantRule::ModuleActions {
            module: "orders",
            actions: &["view", "edit"],
        }],
    },
    RoleGrant {
        role: "user",
        rules: &[GrantRule::ModuleActions {
            module: "products",
            actions: &["view"],
        }],
    },
    RoleGrant {
        role: "teacher",
        rules: &[GrantRule::Names(&["classes.view", "attendance.quick_mark"])],
    },
];
