//! Shell UI strings, authored per group and locale.

use crate::GroupTable;

pub const GROUPS: &[GroupTable<'static>] = &[
    (
        "common",
        &[
            (
                "en",
                &[
                    ("welcome", "Welcome"),
                    ("home", "Home"),
                    ("dashboard", "Dashboard"),
                    ("settings", "Settings"),
                    ("profile", "Profile"),
                    ("logout", "Logout"),
                    ("login", "Login"),
                    ("search", "Search"),
                    ("save", "Save"),
                    ("cancel", "Cancel"),
                    ("delete", "Delete"),
                    ("edit", "Edit"),
                    ("create", "Create"),
                    ("view", "View"),
                    ("actions", "Actions"),
                    ("status", "Status"),
                    ("active", "Active"),
                    ("inactive", "Inactive"),
                    ("yes", "Yes"),
                    ("no", "No"),
                    ("confirm", "Confirm"),
                    ("success", "Success"),
                    ("error", "Error"),
                    ("warning", "Warning"),
                    ("info", "Info"),
                    ("loading", "Loading..."),
                    ("no_data", "No data available"),
                    ("page", "Page"),
                    ("of", "of"),
                    ("showing", "Showing"),
                    ("to", "to"),
                    ("entries", "entries"),
                ],
            ),
            (
                "vi",
                &[
                    ("welcome", "Chào mừng"),
                    ("home", "Trang chủ"),
                    ("dashboard", "Bảng điều khiển"),
                    ("settings", "Cài đặt"),
                    ("profile", "Hồ sơ"),
                    ("logout", "Đăng xuất"),
                    ("login", "Đăng nhập"),
                    ("search", "Tìm kiếm"),
                    ("save", "Lưu"),
                    ("cancel", "Hủy"),
                    ("delete", "Xóa"),
                    ("edit", "Sửa"),
                    ("create", "Tạo mới"),
                    ("view", "Xem"),
                    ("actions", "Hành động"),
                    ("status", "Trạng thái"),
                    ("active", "Kích hoạt"),
                    ("inactive", "Vô hiệu"),
                    ("yes", "Có"),
                    ("no", "Không"),
                    ("confirm", "Xác nhận"),
                    ("success", "Thành công"),
                    ("error", "Lỗi"),
                    ("warning", "Cảnh báo"),
                    ("info", "Thông tin"),
                    ("loading", "Đang tải..."),
                    ("no_data", "Không có dữ liệu"),
                    ("page", "Trang"),
                    ("of", "của"),
                    ("showing", "Hiển thị"),
                    ("to", "đến"),
                    ("entries", "mục"),
                ],
            ),
        ],
    ),
    (
        "auth",
        &[
            (
                "en",
                &[
                    ("login_title", "Login to your account"),
                    ("email", "Email"),
                    ("password", "Password"),
                    ("remember_me", "Remember me"),
                    ("forgot_password", "Forgot password?"),
                    ("login_button", "Sign in"),
                    ("logout_success", "Logged out successfully"),
                    ("login_success", "Logged in successfully"),
                    ("login_failed", "Invalid credentials"),
                    ("unauthorized", "Unauthorized"),
                ],
            ),
            (
                "vi",
                &[
                    ("login_title", "Đăng nhập tài khoản"),
                    ("email", "Email"),
                    ("password", "Mật khẩu"),
                    ("remember_me", "Ghi nhớ đăng nhập"),
                    ("forgot_password", "Quên mật khẩu?"),
                    ("login_button", "Đăng nhập"),
                    ("logout_success", "Đăng xuất thành công"),
                    ("login_success", "Đăng nhập thành công"),
                    ("login_failed", "Thông tin đăng nhập không đúng"),
                    ("unauthorized", "Không có quyền truy cập"),
                ],
            ),
        ],
    ),
    (
        "dashboard",
        &[
            (
                "en",
                &[
                    ("welcome_message", "Welcome back"),
                    ("total_users", "Total Users"),
                    ("total_roles", "Total Roles"),
                    ("total_permissions", "Total Permissions"),
                    ("your_permissions", "Your Permissions"),
                    ("your_roles", "Your Roles"),
                    ("recent_activities", "Recent Activities"),
                    ("quick_actions", "Quick Actions"),
                ],
            ),
            (
                "vi",
                &[
                    ("welcome_message", "Chào mừng trở lại"),
                    ("total_users", "Tổng người dùng"),
                    ("total_roles", "Tổng vai trò"),
                    ("total_permissions", "Tổng quyền"),
                    ("your_permissions", "Quyền của bạn"),
                    ("your_roles", "Vai trò của bạn"),
                    ("recent_activities", "Hoạt động gần đây"),
                    ("quick_actions", "Thao tác nhanh"),
                ],
            ),
        ],
    ),
    (
        "users",
        &[
            (
                "en",
                &[
                    ("title", "Users Management"),
                    ("list", "Users List"),
                    ("create", "Create User"),
                    ("edit", "Edit User"),
                    ("delete", "Delete User"),
                    ("name", "Name"),
                    ("email", "Email"),
                    ("roles", "Roles"),
                    ("created_at", "Created At"),
                    ("updated_at", "Updated At"),
                    ("assign_role", "Assign Role"),
                    ("remove_role", "Remove Role"),
                    ("create_success", "User created successfully"),
                    ("update_success", "User updated successfully"),
                    ("delete_success", "User deleted successfully"),
                    ("delete_confirm", "Are you sure you want to delete this user?"),
                ],
            ),
            (
                "vi",
                &[
                    ("title", "Quản lý người dùng"),
                    ("list", "Danh sách người dùng"),
                    ("create", "Tạo người dùng"),
                    ("edit", "Sửa người dùng"),
                    ("delete", "Xóa người dùng"),
                    ("name", "Tên"),
                    ("email", "Email"),
                    ("roles", "Vai trò"),
                    ("created_at", "Ngày tạo"),
                    ("updated_at", "Ngày cập nhật"),
                    ("assign_role", "Gán vai trò"),
                    ("remove_role", "Xóa vai trò"),
                    ("create_success", "Tạo người dùng thành công"),
                    ("update_success", "Cập nhật người dùng thành công"),
                    ("delete_success", "Xóa người dùng thành công"),
                    ("delete_confirm", "Bạn có chắc muốn xóa người dùng này?"),
                ],
            ),
        ],
    ),
    (
        "roles",
        &[
            (
                "en",
                &[
                    ("title", "Roles Management"),
                    ("list", "Roles List"),
                    ("create", "Create Role"),
                    ("edit", "Edit Role"),
                    ("delete", "Delete Role"),
                    ("name", "Name"),
                    ("display_name", "Display Name"),
                    ("description", "Description"),
                    ("permissions", "Permissions"),
                    ("assign_permission", "Assign Permission"),
                    ("create_success", "Role created successfully"),
                    ("update_success", "Role updated successfully"),
                    ("delete_success", "Role deleted successfully"),
                ],
            ),
            (
                "vi",
                &[
                    ("title", "Quản lý vai trò"),
                    ("list", "Danh sách vai trò"),
                    ("create", "Tạo vai trò"),
                    ("edit", "Sửa vai trò"),
                    ("delete", "Xóa vai trò"),
                    ("name", "Tên"),
                    ("display_name", "Tên hiển thị"),
                    ("description", "Mô tả"),
                    ("permissions", "Quyền"),
                    ("assign_permission", "Gán quyền"),
                    ("create_success", "Tạo vai trò thành công"),
                    ("update_success", "Cập nhật vai trò thành công"),
                    ("delete_success", "Xóa vai trò thành công"),
                ],
            ),
        ],
    ),
    (
        "permissions",
        &[
            (
                "en",
                &[
                    ("title", "Permissions Management"),
                    ("list", "Permissions List"),
                    ("module", "Module"),
                    ("action", "Action"),
                    ("display_name", "Display Name"),
                    ("description", "Description"),
                ],
            ),
            (
                "vi",
                &[
                    ("title", "Quản lý quyền"),
                    ("list", "Danh sách quyền"),
                    ("module", "Module"),
                    ("action", "Hành động"),
                    ("display_name", "Tên hiển thị"),
                    ("description", "Mô tả"),
                ],
            ),
        ],
    ),
    (
        "settings",
        &[
            (
                "en",
                &[
                    ("title", "System Settings"),
                    ("general", "General Settings"),
                    ("languages", "Languages"),
                    ("language_management", "Language Management"),
                    ("language_name", "Language Name"),
                    ("language_code", "Language Code"),
                    ("language_flag", "Flag"),
                    ("language_direction", "Direction"),
                    ("is_default", "Default"),
                    ("is_active", "Active"),
                    ("sort_order", "Sort Order"),
                    ("add_language", "Add Language"),
                    ("edit_language", "Edit Language"),
                    ("delete_language", "Delete Language"),
                    ("set_default", "Set as Default"),
                    ("translations", "Translations"),
                    ("translation_key", "Key"),
                    ("translation_value", "Value"),
                    ("translation_group", "Group"),
                    ("manage_translations", "Manage Translations"),
                    ("language_create_success", "Language created successfully"),
                    ("language_update_success", "Language updated successfully"),
                    ("language_delete_success", "Language deleted successfully"),
                    ("select_language", "Select Language"),
                ],
            ),
            (
                "vi",
                &[
                    ("title", "Cài đặt hệ thống"),
                    ("general", "Cài đặt chung"),
                    ("languages", "Ngôn ngữ"),
                    ("language_management", "Quản lý ngôn ngữ"),
                    ("language_name", "Tên ngôn ngữ"),
                    ("language_code", "Mã ngôn ngữ"),
                    ("language_flag", "Cờ"),
                    ("language_direction", "Hướng"),
                    ("is_default", "Mặc định"),
                    ("is_active", "Kích hoạt"),
                    ("sort_order", "Thứ tự"),
                    ("add_language", "Thêm ngôn ngữ"),
                    ("edit_language", "Sửa ngôn ngữ"),
                    ("delete_language", "Xóa ngôn ngữ"),
                    ("set_default", "Đặt làm mặc định"),
                    ("translations", "Bản dịch"),
                    ("translation_key", "Khóa"),
                    ("translation_value", "Giá trị"),
                    ("translation_group", "Nhóm"),
                    ("manage_translations", "Quản lý bản dịch"),
                    ("language_create_success", "Tạo ngôn ngữ thành công"),
                    ("language_update_success", "Cập nhật ngôn ngữ thành công"),
                    ("language_delete_success", "Xóa ngôn ngữ thành công"),
                    ("select_language", "Chọn ngôn ngữ"),
                ],
            ),
        ],
    ),
];
