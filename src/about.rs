//! 版本、许可证、仓库与示例文本

use crate::cli::InfoRequest;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PROGRAM: &str = env!("CARGO_PKG_NAME");
pub const AUTHOR: &str = "media_batch_dl contributors";

pub const LICENSE: &str = "MIT License

Copyright (c) 2025 media_batch_dl contributors

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.";

const EXAMPLES: &str = "
用法示例:
==========

1. 基本用法（从 urls.txt 下载到 output/）:
   media_batch_dl

2. 指定输入文件与输出目录:
   media_batch_dl --input my_urls.txt --output downloads/

3. 只下载音频并转为 MP3:
   media_batch_dl --format ba --ext mp3

4. 音视频合并为 MKV，每个条目最多尝试 5 次:
   media_batch_dl --format ba+bv --ext mkv --retry 5

5. 条目之间等待 3 秒:
   media_batch_dl --delay 3

6. 下载前检查地址:
   media_batch_dl --test url

7. 检查依赖:
   media_batch_dl --test dep

8. 模拟运行:
   media_batch_dl --dry-run

9. 完整自定义:
   media_batch_dl -i urls.txt -o videos/ -f ba+bv -e mp4 -r 5 -d 2

格式代码:
- ba, bestaudio: 仅音频
- bv, bestvideo: 仅视频
- ba+bv, bestaudio+bestvideo: 音视频合并

扩展名:
- 视频格式: mp4, mkv, webm
- 音频格式: mp3, m4a, aac, opus, wav, flac
";

/// 信息类参数对应的输出文本
pub fn render(request: InfoRequest) -> String {
    match request {
        InfoRequest::Version => format!("{} version {}\nAuthor: {}", PROGRAM, VERSION, AUTHOR),
        InfoRequest::License => LICENSE.to_string(),
        InfoRequest::Repository => {
            let repo = env!("CARGO_PKG_REPOSITORY");
            format!("Repository: {}", if repo.is_empty() { "未设置" } else { repo })
        }
        InfoRequest::Examples => EXAMPLES.to_string(),
    }
}
