//! Error, success and dialog messages, authored as one row per locale.

use crate::TranslationRow;

const fn row(
    group: &'static str,
    key: &'static str,
    locale: &'static str,
    value: &'static str,
) -> TranslationRow<'static> {
    TranslationRow {
        group,
        key,
        locale,
        value,
    }
}

pub const ROWS: &[TranslationRow<'static>] = &[
    row("errors", "unauthorized_view_students", "en", "You do not have permission to view students list"),
    row("errors", "unauthorized_view_students", "vi", "Bạn không có quyền xem danh sách học viên"),
    row("errors", "unauthorized_view_student", "en", "You do not have permission to view this student"),
    row("errors", "unauthorized_view_student", "vi", "Bạn không có quyền xem thông tin học viên này"),
    row("errors", "unauthorized_view_student_classes", "en", "You do not have permission to view this student's classes"),
    row("errors", "unauthorized_view_student_classes", "vi", "Bạn không có quyền xem lớp học của học viên này"),
    row("errors", "student_not_found", "en", "No student record found for this account"),
    row("errors", "student_not_found", "vi", "Không tìm thấy thông tin học viên cho tài khoản này"),
    row("errors", "unauthorized_view_parents", "en", "You do not have permission to view parents list"),
    row("errors", "unauthorized_view_parents", "vi", "Bạn không có quyền xem danh sách phụ huynh"),
    row("errors", "unauthorized_view_parent", "en", "You do not have permission to view this parent"),
    row("errors", "unauthorized_view_parent", "vi", "Bạn không có quyền xem thông tin phụ huynh này"),
    row("errors", "parent_not_found", "en", "No parent record found for this account"),
    row("errors", "parent_not_found", "vi", "Không tìm thấy thông tin phụ huynh cho tài khoản này"),
    row("errors", "unauthorized_view_syllabus", "en", "You do not have permission to view syllabus"),
    row("errors", "unauthorized_view_syllabus", "vi", "Bạn không có quyền xem giáo án"),
    row("errors", "unauthorized_create_syllabus", "en", "You do not have permission to create syllabus"),
    row("errors", "unauthorized_create_syllabus", "vi", "Bạn không có quyền tạo giáo án"),
    row("errors", "unauthorized_edit_syllabus", "en", "You do not have permission to edit syllabus"),
    row("errors", "unauthorized_edit_syllabus", "vi", "Bạn không có quyền sửa giáo án"),
    row("errors", "unauthorized_delete_syllabus", "en", "You do not have permission to delete syllabus"),
    row("errors", "unauthorized_delete_syllabus", "vi", "Bạn không có quyền xóa giáo án"),
    row("errors", "unauthorized_manage_syllabus_content", "en", "You do not have permission to manage syllabus content"),
    row("errors", "unauthorized_manage_syllabus_content", "vi", "Bạn không có quyền quản lý nội dung giáo án"),
    row("errors", "unauthorized_delete_syllabus_content", "en", "You do not have permission to delete syllabus content"),
    row("errors", "unauthorized_delete_syllabus_content", "vi", "Bạn không có quyền xóa nội dung giáo án"),
    row("errors", "unauthorized_post", "en", "You do not have permission to post"),
    row("errors", "unauthorized_post", "vi", "Bạn không có quyền đăng bài"),
    row("errors", "unauthorized_create_event", "en", "You do not have permission to create events"),
    row("errors", "unauthorized_create_event", "vi", "Bạn không có quyền tạo Event"),
    row("errors", "unauthorized_create_homework", "en", "You do not have permission to create homework"),
    row("errors", "unauthorized_create_homework", "vi", "Bạn không có quyền tạo Homework"),
    row("errors", "unauthorized_view_root_folder", "en", "You do not have permission to view root folder"),
    row("errors", "unauthorized_view_root_folder", "vi", "Bạn không có quyền xem thư mục gốc"),
    row("errors", "unauthorized_create_in_root_folder", "en", "You do not have permission to create folder in root folder"),
    row("errors", "unauthorized_create_in_root_folder", "vi", "Bạn không có quyền tạo folder trong thư mục gốc"),
    row("errors", "unauthorized_upload_to_root_folder", "en", "You do not have permission to upload file to root folder"),
    row("errors", "unauthorized_upload_to_root_folder", "vi", "Bạn không có quyền upload file vào thư mục gốc"),
    row("errors", "user_phone_required", "en", "User phone number is required to create Google Drive folder"),
    row("errors", "user_phone_required", "vi", "Số điện thoại người dùng là bắt buộc để tạo folder Google Drive"),
    row("errors", "user_phone_not_unique", "en", "This phone number is already used by another user"),
    row("errors", "user_phone_not_unique", "vi", "Số điện thoại này đã được sử dụng bởi người dùng khác"),
    row("errors", "google_drive_not_configured", "en", "Google Drive is not configured for this branch"),
    row("errors", "google_drive_not_configured", "vi", "Google Drive chưa được cấu hình cho chi nhánh này"),
    row("errors", "google_email_assignment_failed", "en", "Google email assignment failed"),
    row("errors", "google_email_assignment_failed", "vi", "Gán Google email thất bại"),
    row("errors", "google_email_update_failed", "en", "Google email update failed"),
    row("errors", "google_email_update_failed", "vi", "Cập nhật Google email thất bại"),
    row("errors", "google_email_removal_failed", "en", "Google email removal failed"),
    row("errors", "google_email_removal_failed", "vi", "Xóa Google email thất bại"),
    row("errors", "validation_failed", "en", "Validation failed"),
    row("errors", "validation_failed", "vi", "Dữ liệu không hợp lệ"),
    row("errors", "user_google_email_not_set", "en", "User Google email is not set"),
    row("errors", "user_google_email_not_set", "vi", "Người dùng chưa được gán Google email"),
    row("errors", "sync_failed", "en", "Sync failed"),
    row("errors", "sync_failed", "vi", "Đồng bộ thất bại"),
    row("errors", "folder_already_exists", "en", "Folder already exists"),
    row("errors", "folder_already_exists", "vi", "Folder đã tồn tại"),
    row("errors", "google_drive_not_connected", "en", "Account is not connected to Google Drive"),
    row("errors", "google_drive_not_connected", "vi", "Tài khoản chưa kết nối Google Drive"),
    row("errors", "syllabus_folder_not_found", "en", "Syllabus folder not found"),
    row("errors", "syllabus_folder_not_found", "vi", "Không tìm thấy thư mục Syllabus"),
    row("errors", "no_permission_to_folder", "en", "You do not have permission to access this folder"),
    row("errors", "no_permission_to_folder", "vi", "Bạn không có quyền truy cập folder này"),
    row("errors", "syllabus_folder_creation_failed", "en", "Failed to create syllabus folder"),
    row("errors", "syllabus_folder_creation_failed", "vi", "Tạo thư mục giáo án thất bại"),
    row("errors", "teacher_no_google_email", "en", "Teacher does not have a Google Drive account assigned. Please contact Admin to assign Google email before adding to subject."),
    row("errors", "teacher_no_google_email", "vi", "Giáo viên chưa được gán tài khoản Google Drive. Vui lòng liên hệ Admin để gán Google email trước khi thêm vào môn học."),
    row("errors", "google_drive_permission_failed", "en", "Failed to grant Google Drive permission"),
    row("errors", "google_drive_permission_failed", "vi", "Không thể cấp quyền Google Drive"),
    row("errors", "unauthorized_view_subjects", "en", "You do not have permission to view subjects list"),
    row("errors", "unauthorized_view_subjects", "vi", "Bạn không có quyền xem danh sách môn học"),
    row("errors", "unauthorized", "en", "Unauthorized access"),
    row("errors", "unauthorized", "vi", "Không có quyền truy cập"),
    row("errors", "not_found", "en", "Not found"),
    row("errors", "not_found", "vi", "Không tìm thấy"),
    row("errors", "server_error", "en", "Server error"),
    row("errors", "server_error", "vi", "Lỗi máy chủ"),

    row("messages", "google_email_assigned_successfully", "en", "Google email assigned and folder created successfully"),
    row("messages", "google_email_assigned_successfully", "vi", "Đã gán Google email và tạo folder thành công"),
    row("messages", "google_email_updated_successfully", "en", "Google email updated successfully"),
    row("messages", "google_email_updated_successfully", "vi", "Đã cập nhật Google email thành công"),
    row("messages", "google_email_removed_successfully", "en", "Google email removed successfully"),
    row("messages", "google_email_removed_successfully", "vi", "Đã xóa Google email thành công"),
    row("messages", "permissions_synced_successfully", "en", "Permissions synced successfully"),
    row("messages", "permissions_synced_successfully", "vi", "Đồng bộ quyền truy cập thành công"),
    row("messages", "no_accessible_folders", "en", "You have no accessible folders"),
    row("messages", "no_accessible_folders", "vi", "Bạn chưa có quyền truy cập folder nào"),
    row("messages", "sync_completed_successfully", "en", "Sync completed successfully"),
    row("messages", "sync_completed_successfully", "vi", "Đồng bộ hoàn tất thành công"),
    row("messages", "use_existing_or_create_new", "en", "Do you want to use the existing folder or create a new one?"),
    row("messages", "use_existing_or_create_new", "vi", "Bạn muốn sử dụng folder hiện có hay tạo folder mới?"),
    row("messages", "use_existing_or_create_new_syllabus", "en", "This syllabus folder already exists. Do you want to use the existing folder or create a new one?"),
    row("messages", "use_existing_or_create_new_syllabus", "vi", "Folder giáo án này đã tồn tại. Bạn muốn sử dụng folder hiện có hay tạo folder mới?"),
    row("messages", "syllabus_folder_created_successfully", "en", "Syllabus folder created successfully"),
    row("messages", "syllabus_folder_created_successfully", "vi", "Tạo thư mục giáo án thành công"),

    // Confirmation dialogs
    row("swal", "success", "en", "Success"),
    row("swal", "success", "vi", "Thành Công"),
    row("swal", "error", "en", "Error"),
    row("swal", "error", "vi", "Lỗi"),
    row("swal", "warning", "en", "Warning"),
    row("swal", "warning", "vi", "Cảnh Báo"),
    row("swal", "info", "en", "Information"),
    row("swal", "info", "vi", "Thông Tin"),
    row("swal", "confirm", "en", "Confirm"),
    row("swal", "confirm", "vi", "Xác Nhận"),
    row("swal", "ok", "en", "OK"),
    row("swal", "ok", "vi", "Đồng Ý"),
    row("swal", "cancel", "en", "Cancel"),
    row("swal", "cancel", "vi", "Hủy"),
    row("swal", "delete", "en", "Delete"),
    row("swal", "delete", "vi", "Xóa"),
    row("swal", "yes", "en", "Yes"),
    row("swal", "yes", "vi", "Có"),
    row("swal", "no", "en", "No"),
    row("swal", "no", "vi", "Không"),
    row("swal", "loading", "en", "Loading..."),
    row("swal", "loading", "vi", "Đang tải..."),
    row("swal", "saving", "en", "Saving..."),
    row("swal", "saving", "vi", "Đang lưu..."),
    row("swal", "confirm_delete", "en", "Are you sure?"),
    row("swal", "confirm_delete", "vi", "Bạn có chắc chắn?"),
    row("swal", "confirm_delete_message", "en", "This action cannot be undone!"),
    row("swal", "confirm_delete_message", "vi", "Hành động này không thể hoàn tác!"),
    row("swal", "operation_success", "en", "Operation completed successfully"),
    row("swal", "operation_success", "vi", "Thao tác thành công"),
    row("swal", "operation_failed", "en", "Operation failed"),
    row("swal", "operation_failed", "vi", "Thao tác thất bại"),
    row("swal", "no_data", "en", "No data available"),
    row("swal", "no_data", "vi", "Không có dữ liệu"),
    row("swal", "error_occurred", "en", "An error occurred"),
    row("swal", "error_occurred", "vi", "Đã xảy ra lỗi"),
    row("swal", "select", "en", "Select"),
    row("swal", "select", "vi", "Chọn"),
    row("swal", "search", "en", "Search..."),
    row("swal", "search", "vi", "Tìm kiếm..."),
    row("swal", "showing", "en", "Showing"),
    row("swal", "showing", "vi", "Hiển thị"),
    row("swal", "of", "en", "of"),
    row("swal", "of", "vi", "trên"),
    row("swal", "previous", "en", "Previous"),
    row("swal", "previous", "vi", "Trước"),
    row("swal", "next", "en", "Next"),
    row("swal", "next", "vi", "Sau"),
    row("swal", "edit", "en", "Edit"),
    row("swal", "edit", "vi", "Sửa"),
    row("swal", "view", "en", "View"),
    row("swal", "view", "vi", "Xem"),
    row("swal", "actions", "en", "Actions"),
    row("swal", "actions", "vi", "Thao Tác"),
    row("swal", "save", "en", "Save"),
    row("swal", "save", "vi", "Lưu"),
    row("swal", "close", "en", "Close"),
    row("swal", "close", "vi", "Đóng"),
    row("swal", "back", "en", "Back"),
    row("swal", "back", "vi", "Quay Lại"),
    row("swal", "continue", "en", "Continue"),
    row("swal", "continue", "vi", "Tiếp Tục"),
    row("swal", "submit", "en", "Submit"),
    row("swal", "submit", "vi", "Gửi"),
    row("swal", "reset", "en", "Reset"),
    row("swal", "reset", "vi", "Đặt Lại"),
];
